use super::LineNumber;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: u16,
    line_number: LineNumber,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            line_number: None,
            message: String::new(),
        }
    }

    pub fn is_direct(&self) -> bool {
        self.line_number.is_none()
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }

    pub fn in_line_number(&self, line: LineNumber) -> Error {
        Error {
            code: self.code,
            line_number: line,
            message: self.message.clone(),
        }
    }

    pub fn message(&self, message: &str) -> Error {
        Error {
            code: self.code,
            line_number: self.line_number,
            message: message.to_string(),
        }
    }

    pub fn category(&self) -> Category {
        use ErrorCode::*;
        match self.code {
            c if c == InvalidNumber as u16 => Category::Lex,
            c if c == SyntaxError as u16 => Category::Parse,
            c if c == InvalidVariable as u16
                || c == TypeMismatch as u16
                || c == SubscriptOutOfRange as u16
                || c == RedimensionedArray as u16
                || c == Overflow as u16 =>
            {
                Category::Eval
            }
            c if c == UndefinedLine as u16
                || c == ReturnWithoutGosub as u16
                || c == NextWithoutFor as u16
                || c == IllegalDirect as u16
                || c == IllegalInProgram as u16 =>
            {
                Category::ControlFlow
            }
            _ => Category::System,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Category {
    Lex,
    Parse,
    Eval,
    ControlFlow,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ErrorCode {
    Break = 0,
    NextWithoutFor = 1,
    SyntaxError = 2,
    ReturnWithoutGosub = 3,
    Overflow = 6,
    OutOfMemory = 7,
    UndefinedLine = 8,
    SubscriptOutOfRange = 9,
    RedimensionedArray = 10,
    IllegalDirect = 12,
    TypeMismatch = 13,
    InvalidNumber = 24,
    InvalidVariable = 25,
    IllegalInProgram = 27,
    InternalError = 51,
    FileNotFound = 53,
    DiskIoError = 57,
    BadFileName = 64,
    DirectStatementInFile = 66,
}

impl std::error::Error for Error {}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            0 => "BREAK",
            1 => "NEXT WITHOUT FOR",
            2 => "SYNTAX ERROR",
            3 => "RETURN WITHOUT GOSUB",
            6 => "OVERFLOW",
            7 => "OUT OF MEMORY",
            8 => "UNDEFINED LINE",
            9 => "SUBSCRIPT OUT OF RANGE",
            10 => "REDIMENSIONED ARRAY",
            12 => "ILLEGAL DIRECT",
            13 => "TYPE MISMATCH",
            24 => "INVALID NUMBER",
            25 => "INVALID VARIABLE",
            27 => "ILLEGAL IN PROGRAM",
            51 => "INTERNAL ERROR",
            53 => "FILE NOT FOUND",
            57 => "DISK I/O ERROR",
            64 => "BAD FILE NAME",
            66 => "DIRECT STATEMENT IN FILE",
            _ => "",
        };
        let mut suffix = String::new();
        if let Some(line_number) = self.line_number {
            suffix.push_str(&format!(" {}", line_number));
        }
        let message = if self.message.is_empty() {
            String::new()
        } else {
            format!("; {}", self.message)
        };
        if code_str.is_empty() {
            if suffix.is_empty() {
                write!(f, "PROGRAM ERROR {}{}", self.code, message)
            } else {
                write!(f, "PROGRAM ERROR {} IN{}{}", self.code, suffix, message)
            }
        } else if suffix.is_empty() {
            write!(f, "{}{}", code_str, message)
        } else {
            write!(f, "{} IN{}{}", code_str, suffix, message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(error!(SyntaxError).to_string(), "SYNTAX ERROR");
        assert_eq!(
            error!(UndefinedLine, Some(20)).to_string(),
            "UNDEFINED LINE IN 20"
        );
        assert_eq!(
            error!(SyntaxError, Some(10); "EXPECTED CLOSING PARENTHESIS").to_string(),
            "SYNTAX ERROR IN 10; EXPECTED CLOSING PARENTHESIS"
        );
    }

    #[test]
    fn test_category() {
        assert_eq!(error!(InvalidNumber).category(), Category::Lex);
        assert_eq!(error!(SyntaxError).category(), Category::Parse);
        assert_eq!(error!(SubscriptOutOfRange).category(), Category::Eval);
        assert_eq!(error!(ReturnWithoutGosub).category(), Category::ControlFlow);
        assert_eq!(error!(FileNotFound).category(), Category::System);
    }
}
