/*!
# `RUN ["<filename>"]`

## Purpose
Run the program from the first line, optionally loading it first.

## Remarks
Variables are kept from before the run. Not allowed inside a program.

*/
