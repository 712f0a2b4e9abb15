/*!
# `RETURN`

## Purpose
Come back from a `GOSUB`.

## Remarks
Reports `RETURN WITHOUT GOSUB` if no `GOSUB` is waiting, and
`UNDEFINED LINE` if the line to return to has since been deleted.

*/
