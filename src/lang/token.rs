use std::collections::HashMap;

thread_local!(
    static STRING_TO_CATEGORY: HashMap<&'static str, Category> = Word::ALL
        .iter()
        .map(|&w| Category::Word(w))
        .chain(Operator::ALL.iter().map(|&o| Category::Operator(o)))
        .chain(Function::ALL.iter().map(|&f| Category::Function(f)))
        .chain(PUNCTUATION.iter().copied())
        .map(|c| (c.symbol(), c))
        .chain(ALIASES.iter().copied())
        .collect();
);

const PUNCTUATION: [Category; 6] = [
    Category::LParen,
    Category::RParen,
    Category::Comma,
    Category::Colon,
    Category::Semicolon,
    Category::Hash,
];

const ALIASES: [(&str, Category); 3] = [
    ("END", Category::Word(Word::Stop)),
    ("%", Category::Operator(Operator::Modulus)),
    ("!=", Category::Operator(Operator::NotEqual)),
];

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub column: usize,
    pub category: Category,
    pub lexeme: String,
}

impl Token {
    pub fn new<S: Into<String>>(column: usize, category: Category, lexeme: S) -> Token {
        Token {
            column,
            category,
            lexeme: lexeme.into(),
        }
    }

    pub fn is(&self, category: Category) -> bool {
        self.category == category
    }

    pub fn span(&self) -> std::ops::Range<usize> {
        let mut len = self.lexeme.chars().count();
        if self.category == Category::String {
            len += 2;
        }
        self.column..self.column + len.max(1)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.category {
            Category::String => write!(f, "\"{}\"", self.lexeme),
            _ => write!(f, "{}", self.lexeme),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Integer,
    Float,
    String,
    Name,
    Word(Word),
    Function(Function),
    Operator(Operator),
    LParen,
    RParen,
    Comma,
    Colon,
    Semicolon,
    Hash,
}

impl Category {
    /// Keywords, operators and punctuation in their source spelling.
    pub fn from_string(s: &str) -> Option<Category> {
        STRING_TO_CATEGORY.with(|stc| stc.get(s).copied())
    }

    fn symbol(self) -> &'static str {
        use Category::*;
        match self {
            Word(w) => w.as_str(),
            Operator(o) => o.as_str(),
            Function(f) => f.as_str(),
            LParen => "(",
            RParen => ")",
            Comma => ",",
            Colon => ":",
            Semicolon => ";",
            Hash => "#",
            Integer | Float | String | Name => "",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Category::*;
        match self {
            Integer => write!(f, "INTEGER"),
            Float => write!(f, "NUMBER"),
            String => write!(f, "STRING"),
            Name => write!(f, "VARIABLE"),
            _ => write!(f, "{}", self.symbol()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Word {
    Append,
    As,
    Close,
    Data,
    Dim,
    Else,
    Exit,
    For,
    Gosub,
    Goto,
    If,
    Input,
    Let,
    List,
    New,
    Next,
    On,
    Open,
    Output,
    Print,
    Read,
    Rem,
    Restore,
    Return,
    Run,
    Step,
    Stop,
    Then,
    To,
}

impl Word {
    const ALL: [Word; 29] = [
        Word::Append,
        Word::As,
        Word::Close,
        Word::Data,
        Word::Dim,
        Word::Else,
        Word::Exit,
        Word::For,
        Word::Gosub,
        Word::Goto,
        Word::If,
        Word::Input,
        Word::Let,
        Word::List,
        Word::New,
        Word::Next,
        Word::On,
        Word::Open,
        Word::Output,
        Word::Print,
        Word::Read,
        Word::Rem,
        Word::Restore,
        Word::Return,
        Word::Run,
        Word::Step,
        Word::Stop,
        Word::Then,
        Word::To,
    ];

    fn as_str(self) -> &'static str {
        use Word::*;
        match self {
            Append => "APPEND",
            As => "AS",
            Close => "CLOSE",
            Data => "DATA",
            Dim => "DIM",
            Else => "ELSE",
            Exit => "EXIT",
            For => "FOR",
            Gosub => "GOSUB",
            Goto => "GOTO",
            If => "IF",
            Input => "INPUT",
            Let => "LET",
            List => "LIST",
            New => "NEW",
            Next => "NEXT",
            On => "ON",
            Open => "OPEN",
            Output => "OUTPUT",
            Print => "PRINT",
            Read => "READ",
            Rem => "REM",
            Restore => "RESTORE",
            Return => "RETURN",
            Run => "RUN",
            Step => "STEP",
            Stop => "STOP",
            Then => "THEN",
            To => "TO",
        }
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Multiply,
    Divide,
    Modulus,
    Plus,
    Minus,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Not,
    And,
    Or,
}

impl Operator {
    const ALL: [Operator; 14] = [
        Operator::Multiply,
        Operator::Divide,
        Operator::Modulus,
        Operator::Plus,
        Operator::Minus,
        Operator::Equal,
        Operator::NotEqual,
        Operator::Less,
        Operator::LessEqual,
        Operator::Greater,
        Operator::GreaterEqual,
        Operator::Not,
        Operator::And,
        Operator::Or,
    ];

    pub fn is_relational(self) -> bool {
        use Operator::*;
        matches!(
            self,
            Equal | NotEqual | Less | LessEqual | Greater | GreaterEqual
        )
    }

    fn as_str(self) -> &'static str {
        use Operator::*;
        match self {
            Multiply => "*",
            Divide => "/",
            Modulus => "MOD",
            Plus => "+",
            Minus => "-",
            Equal => "=",
            NotEqual => "<>",
            Less => "<",
            LessEqual => "<=",
            Greater => ">",
            GreaterEqual => ">=",
            Not => "NOT",
            And => "AND",
            Or => "OR",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    Abs,
    Asc,
    Chr,
    Int,
    Left,
    Len,
    Mid,
    Right,
    Rnd,
    Sqr,
    Str,
    Tab,
    Val,
}

impl Function {
    const ALL: [Function; 13] = [
        Function::Abs,
        Function::Asc,
        Function::Chr,
        Function::Int,
        Function::Left,
        Function::Len,
        Function::Mid,
        Function::Right,
        Function::Rnd,
        Function::Sqr,
        Function::Str,
        Function::Tab,
        Function::Val,
    ];

    /// Smallest and largest number of arguments.
    pub fn arity(self) -> std::ops::RangeInclusive<usize> {
        use Function::*;
        match self {
            Rnd => 0..=1,
            Abs | Asc | Chr | Int | Len | Sqr | Str | Tab | Val => 1..=1,
            Left | Right => 2..=2,
            Mid => 2..=3,
        }
    }

    fn as_str(self) -> &'static str {
        use Function::*;
        match self {
            Abs => "ABS",
            Asc => "ASC",
            Chr => "CHR$",
            Int => "INT",
            Left => "LEFT$",
            Len => "LEN",
            Mid => "MID$",
            Right => "RIGHT$",
            Rnd => "RND",
            Sqr => "SQR",
            Str => "STR$",
            Tab => "TAB",
            Val => "VAL",
        }
    }
}

impl std::fmt::Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
