/*!
# `NEW`

## Purpose
Erase the program.

## Remarks
Variables are kept; use `CLEAR` to erase them.

*/
