/*!
# `GOSUB <line number>`

## Purpose
Call a subroutine.

## Remarks
Execution moves to the line number. A later `RETURN` comes back to
the line after the `GOSUB`. Calls may nest.

## Example
```text
10 GOSUB 100
20 PRINT "BACK"
30 END
100 PRINT "IN SUBROUTINE"
110 RETURN
```

*/
