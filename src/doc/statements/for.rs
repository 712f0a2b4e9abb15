/*!
# `FOR <variable>=x TO y [STEP z]`
Where x, y, and z are expressions.
## Purpose
Used with `NEXT` to repeat execution of statements
while iterating over a sequence of numbers.

## Remarks
On the first pass x is assigned to the variable and the statements
up to `NEXT` run. Each `NEXT` comes back to the `FOR`, which adds z
(1 when there is no `STEP`) and leaves the loop once the variable
passes y. The statements always run at least once. `TO` and `STEP`
are evaluated again on each pass.

The variable must be numeric. `FOR` only works inside a program.

## Example
```text
10 FOR I=1 TO 7 STEP 2
20 PRINT I
30 NEXT I
RUN
1
3
5
7
```

*/
