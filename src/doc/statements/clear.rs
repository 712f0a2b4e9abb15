/*!
# `CLEAR`

## Purpose
Forget all variables.

## Remarks
The program is untouched. `NEW` does the opposite: it erases the
program and keeps the variables.

## Example
```text
A = 5
CLEAR
PRINT A
INVALID VARIABLE; A NOT SET
```

*/
