/*!
# `CLS`

## Purpose
Clear the terminal screen.

*/
