/*!
# `DELETE <line number>[,...]`

## Purpose
Remove lines from the program. `DEL` is the same statement.

## Remarks
A missing line is an `UNDEFINED LINE` error. Typing a line number
by itself also deletes that line. Not allowed inside a program.

## Example
```text
DELETE 20, 30
```

*/
