/*!
# Expressions and Types

Variables are names that refer to a value. A name starts with a letter
or underbar followed by letters, digits and underbars. The last
character decides what kind of value the variable holds.

```text
LET A$ = "X"  ' String
LET A# = 5    ' Integer, signed 32-bit
LET A% = 1.5  ' Double, 64-bit floating point
LET A = 1.5   ' Double
```

The decoration is part of the name. `A$`, `A#` and `A` are three
different variables and assigning one never disturbs the others.
Names are case sensitive; statement words like `PRINT` are not.

Assigning a number with a fraction to an integer variable truncates
it toward zero. Assigning a string to a numeric variable, or a number
to a string variable, is a `TYPE MISMATCH` and the variable keeps its
old value. Reading a variable that was never assigned is an
`INVALID VARIABLE` error.

Arithmetic is always done in 64-bit floating point, so `7# / 2` is
`3.5`. Division by zero is not an error; the result is infinite.

## Operators

From highest to lowest precedence.

| Operator               | Meaning                                   |
|------------------------|-------------------------------------------|
| `-x` `NOT x`           | negation, logical not                     |
| `*` `/`                | multiply, divide                          |
| `+` `-` `&`            | add (or join two strings), subtract, join |
| `,`                    | list of values                            |
| `<` `<=` `>` `>=`      | comparison                                |
| `=` `<>`               | equality                                  |

Comparisons produce `true` or `false`. Strings compare in character
order. `TRUE` and `FALSE` may be written directly and only compare
with `=` and `<>`. In a condition a number is true when it is not zero.

Parentheses group as usual.

```text
PRINT 3 + 4 * 2
11
PRINT (3 + 4) * 2
14
PRINT 5 > 3
true
```

*/
