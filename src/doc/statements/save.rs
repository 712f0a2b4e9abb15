/*!
# `SAVE "<filename>"`

## Purpose
Write the program to a file as plain text.

*/
