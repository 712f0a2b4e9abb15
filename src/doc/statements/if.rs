/*!
# `IF <condition> THEN <statement or line number>`

## Purpose
Run a statement, or jump to a line, only when the condition is true.

## Remarks
The condition is a comparison, `TRUE`/`FALSE`, or a number which is
true when not zero.

## Example
```text
10 A = 5
20 IF A > 3 THEN PRINT "BIG"
30 IF A = 5 THEN 50
40 PRINT "SKIPPED"
50 IF A THEN B = A * 2
```

*/
