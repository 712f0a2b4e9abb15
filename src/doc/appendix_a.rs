/*!
# Errors

Errors print their name, the program line number when one was running,
and sometimes a detail after a semicolon.

```text
10 GOTO 99
RUN
UNDEFINED LINE IN 10; 99
```

| Code | Name                     | Cause                                                  |
|------|--------------------------|--------------------------------------------------------|
| 0    | BREAK                    | CTRL-C stopped the program or an `INPUT`.              |
| 1    | NEXT WITHOUT FOR         | `NEXT` names a variable with no running `FOR`.         |
| 2    | SYNTAX ERROR             | The statement could not be parsed.                     |
| 3    | RETURN WITHOUT GOSUB     | `RETURN` with no `GOSUB` waiting.                      |
| 6    | OVERFLOW                 | A value does not fit in an integer variable.           |
| 7    | OUT OF MEMORY            | Too many variables, too large an array, or too many nested `GOSUB`s. |
| 8    | UNDEFINED LINE           | A jump or listing named a line that does not exist.    |
| 9    | SUBSCRIPT OUT OF RANGE   | An array index is negative or past its dimension.      |
| 10   | REDIMENSIONED ARRAY      | `DIM` on a name that already exists.                   |
| 12   | ILLEGAL DIRECT           | `FOR`, `GOSUB` and `RETURN` only work in a program.    |
| 13   | TYPE MISMATCH            | A value of the wrong kind for the operation or variable. |
| 24   | INVALID NUMBER           | A number such as `1.2.3` could not be read.            |
| 25   | INVALID VARIABLE         | Reading an unassigned variable, or an array as a scalar. |
| 27   | ILLEGAL IN PROGRAM       | `LIST`, `NEW`, `RUN`, `DELETE` and the like inside a program. |
| 51   | INTERNAL ERROR           | A bug in the interpreter.                              |
| 53   | FILE NOT FOUND           | `LOAD` could not find the file.                        |
| 57   | DISK I/O ERROR           | Reading or writing the file failed.                    |
| 64   | BAD FILE NAME            | The file name was missing or not a string.             |
| 66   | DIRECT STATEMENT IN FILE | A loaded file has a line without a line number.        |

*/
