/*!
# Statements and Functions

## Values
Numbers are integers until a fraction shows up, and `/` always gives
a fraction. Variables ending in `$` hold strings, all others hold
numbers. Assigning the wrong kind is a syntax error. A variable that was
never assigned reads as `0` or `""`. Comparisons and `AND`, `OR`, `NOT`
give `1` for true and `0` for false.

Operators from loosest to tightest: `AND OR`, `NOT`,
`= <> < <= > >=`, `+ -`, `* / MOD`, unary `-`. `%` means `MOD` and
`!=` means `<>`. `MOD` takes the sign of the divisor.

## Statements
```text
LET X = 1             X = 1 works too
DIM A(10), B$(3, 3)   each dimension has one more slot than declared
PRINT A; B, C$;       ; packs, , jumps to the next 14 column zone
PRINT TAB(10); "X"    TAB moves to column 10, or to a new line if past it
INPUT "Name"; N$      prompts "Name? " and repeats on a bad answer
IF X > 1 THEN 100 ELSE PRINT "SMALL": GOTO 200
FOR I = 10 TO 1 STEP -2 ... NEXT I
GOTO 100, GOSUB 100, RETURN
ON N GOTO 100, 200, 300   0 or out of range falls through
READ A, B$ / DATA 1, "TWO" / RESTORE [line]
OPEN "out.txt" FOR OUTPUT AS #1: PRINT #1, X: CLOSE #1
OPEN "in.txt" FOR INPUT AS #2: INPUT #2, A$
STOP or END           also closes open files
REM anything
```

`FOR` has to be the last statement on its line and a loop that starts
past its limit resumes after the line holding `NEXT <variable>`.

## Functions
```text
INT(X)  ABS(X)  SQR(X)  RND(X)  VAL(S$)  STR$(X)  LEN(S$)
LEFT$(S$, N)  RIGHT$(S$, N)  MID$(S$, START [, N])  CHR$(N)  ASC(S$)
```
*/
