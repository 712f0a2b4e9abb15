/*!
# `INPUT ["<prompt string>"[;]]<variable>`

## Purpose
Suspends execution and awaits a response from the terminal.

## Remarks
The prompt prints on its own line unless followed by a semicolon.
A `? ` marks where to type. Entering text that is not a number for
a numeric variable reports `TYPE MISMATCH` and asks again.

## Example
```text
10 INPUT "YOUR NAME"; N$
20 PRINT "HELLO "; N$
```

*/
