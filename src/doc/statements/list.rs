/*!
# `LIST [<line number>[,...]]`

## Purpose
Print the program, or just the named lines.

## Remarks
Not allowed inside a program.

*/
