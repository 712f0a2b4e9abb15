/*!
# `LOAD "<filename>"`

## Purpose
Replace the program with one read from a file or URL.

## Remarks
Every line in the file must start with a line number. Variables are
kept.

## Example
```text
LOAD "startrek.bas"
LOAD "https://example.com/hello.bas"
```

*/
