/*!
# `REM <remark>`

## Purpose
A remark. Everything after `REM` is ignored.

*/
