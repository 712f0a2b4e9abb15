/*!
# Introductory Tutorial

Start the interpreter from a terminal. A `>` prompt means it is ready
to accept a statement. Type CTRL-D or `BYE` to leave.
<pre><code>&nbsp;> █
</code></pre>

Stop a running program with CTRL-C.

A statement typed without a line number runs immediately. This is
called direct mode.

<pre><code>&nbsp;> print "Hello World"
&nbsp;  Hello World
</code></pre>

Put a line number in front of the same statement and it is stored
instead of run. Line numbers are whole numbers from 0 to 4294967294.
Lines are kept in number order no matter what order you type them in.

<pre><code>&nbsp;> 20 print "World"
&nbsp;> 10 print "Hello"
&nbsp;> list
&nbsp;  10 print "Hello"
&nbsp;  20 print "World"
&nbsp;> run
&nbsp;  Hello
&nbsp;  World
</code></pre>

Typing a line number that already exists replaces that line. Typing
a line number by itself deletes the line.

<pre><code>&nbsp;> 20
&nbsp;> list
&nbsp;  10 print "Hello"
</code></pre>

Programs are saved and loaded as plain text, one line per line.
`LOAD` also accepts an `http://` or `https://` address.

<pre><code>&nbsp;> save "hello.bas"
&nbsp;> new
&nbsp;> run "hello.bas"
&nbsp;  Hello
</code></pre>

Pass a file name on the command line to load and run it on startup.
`--no-color` turns off bold error messages. Set `RUST_LOG=debug` to
trace jumps and program edits on standard error.

*/
