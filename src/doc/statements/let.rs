/*!
# `[LET] <variable>=<expression>`

## Purpose
Assign a value to a variable or array element.

## Remarks
The word `LET` is optional. Numbers assigned to an integer variable
are truncated toward zero.

## Example
```text
LET A = 1.5
B# = A * 3
C$(2) = "TWO"
```

*/
