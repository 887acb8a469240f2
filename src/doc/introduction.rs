/*!
# Introductory Tutorial

Start the executable with no arguments to get the prompt.
<pre><code>&nbsp;  READY.
&nbsp;> █
</code></pre>

Stop a running program with CTRL-C. Leave with `EXIT` or CTRL-D.

A line that begins with a number is stored as part of the program.
Entering the same number again replaces the line, and entering the
number by itself deletes it.

<pre><code>&nbsp;> 10 PRINT "Hello World"
&nbsp;> 20 GOTO 10
&nbsp;> 20
&nbsp;> LIST
&nbsp;  10 PRINT "Hello World"
&nbsp;> RUN
&nbsp;  Hello World
</code></pre>

To edit a line, type its number and press TAB. The stored text is loaded
into the input buffer.

<pre><code>&nbsp;> 10<i>{TAB}</i>
&nbsp;> 10 PRINT "Hello World"
</code></pre>

`LIST` takes an optional range: `LIST 10`, `LIST 10-50`, `LIST -50`
and `LIST 50-`. `NEW` erases the program.

Statements without a line number run right away, which is handy for
looking at variables after a program stops. They cannot jump.

<pre><code>&nbsp;> PRINT 2 + 3 * 4
&nbsp;  14
</code></pre>

A program file can be run without the prompt by naming it on the
command line. Every line in the file needs a line number.
```text
basic hello.bas --seed 42
```

When something goes wrong the message names the line, and the part of
the line that caused it is underlined.
<pre><code>&nbsp;> 10 PRINT 1 +
&nbsp;> RUN
&nbsp;  SYNTAX ERROR; EXPECTED EXPRESSION in line 10
&nbsp;  10 PRINT 1 +<u> </u>
</code></pre>
*/
