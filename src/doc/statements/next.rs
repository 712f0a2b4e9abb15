/*!
# `NEXT <variable>`

## Purpose
Go back to the `FOR` of the same variable.

## Remarks
See `FOR`. Reports `NEXT WITHOUT FOR` when no loop is running on
that variable.

*/
