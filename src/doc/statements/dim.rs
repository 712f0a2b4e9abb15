/*!
# `DIM <variable name>(<dimensions>)[,...]`

## Purpose
Create an array with fixed dimensions.

## Remarks
Every element starts as zero or the empty string. Indexes start at 0
and stop one short of the dimension, so `DIM X(10)` allows `X(0)` to
`X(9)`. Index values with a fraction are truncated. An array must be
created with `DIM` before it is used and can not be dimensioned again.

## Example
```text
10 DIM A$(100), X(10,10)
20 A$(42)="THE ANSWER"
30 X(4,2)=2.5
40 PRINT A$(42) & "!"; " "; X(4,2)
RUN
THE ANSWER! 2.5
```

*/
