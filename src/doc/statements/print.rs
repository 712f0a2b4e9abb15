/*!
# `PRINT [<expression>][;...]`

## Purpose
Print values to the terminal.

## Remarks
Items separated by `;` print with nothing between them. A trailing
`;` leaves the cursor on the same line. Items separated by `,` print
with a tab between them.

## Example
```text
PRINT "A"; "B"
AB
PRINT 1, 2
1	2
```

*/
