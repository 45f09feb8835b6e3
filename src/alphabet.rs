//! Ordered symbol sets and per-symbol classification.
//!
//! Every codec operates on closed, ordered ASCII alphabets; a symbol's class
//! decides which alphabet (if any) transforms it, and anything unclassified
//! passes through the codecs untouched.

/// Lowercase letters, the primary cipher alphabet.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";

/// Uppercase letters.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Decimal digits.
pub const DIGITS: &str = "0123456789";

/// The 32 ASCII punctuation characters in code-point order.
/// Whitespace is deliberately absent so it never shifts.
pub const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Category of a single symbol, used to dispatch it to an alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolClass {
    Lower,
    Upper,
    Digit,
    Punctuation,
    /// Whitespace, control characters, and anything non-ASCII.
    Other,
}

/// Classify a symbol into the alphabet class that will transform it.
pub fn classify(symbol: char) -> SymbolClass {
    if symbol.is_ascii_lowercase() {
        SymbolClass::Lower
    } else if symbol.is_ascii_uppercase() {
        SymbolClass::Upper
    } else if symbol.is_ascii_digit() {
        SymbolClass::Digit
    } else if symbol.is_ascii_punctuation() {
        SymbolClass::Punctuation
    } else {
        SymbolClass::Other
    }
}

/// An ordered sequence of distinct ASCII symbols with O(1) index lookup.
///
/// The sequence order defines shift arithmetic (`len()` is the modulus) and
/// the bucket order of frequency distributions.
#[derive(Debug, Clone)]
pub struct Alphabet {
    symbols: Vec<char>,
    index: [Option<u8>; 128],
}

impl Alphabet {
    fn from_symbols(symbols: &str) -> Self {
        let symbols: Vec<char> = symbols.chars().collect();
        debug_assert!(symbols.len() <= u8::MAX as usize);

        let mut index = [None; 128];
        for (position, &symbol) in symbols.iter().enumerate() {
            debug_assert!(symbol.is_ascii());
            debug_assert!(index[symbol as usize].is_none(), "duplicate symbol");
            index[symbol as usize] = Some(position as u8);
        }
        Self { symbols, index }
    }

    pub fn lowercase() -> Self {
        Self::from_symbols(LOWERCASE)
    }

    pub fn uppercase() -> Self {
        Self::from_symbols(UPPERCASE)
    }

    pub fn digits() -> Self {
        Self::from_symbols(DIGITS)
    }

    pub fn punctuation() -> Self {
        Self::from_symbols(PUNCTUATION)
    }

    /// The union of all cipher alphabets, in the fixed order
    /// lowercase, uppercase, digits, punctuation. Vigenere key symbols take
    /// their shift value from their index in this alphabet.
    pub fn combined() -> Self {
        let mut symbols = String::new();
        symbols.push_str(LOWERCASE);
        symbols.push_str(UPPERCASE);
        symbols.push_str(DIGITS);
        symbols.push_str(PUNCTUATION);
        Self::from_symbols(&symbols)
    }

    /// Bucket order for frequency distributions and trained models:
    /// lowercase letters, digits, punctuation, space. Letters are counted
    /// case-insensitively, so uppercase has no buckets of its own.
    pub fn reference() -> Self {
        let mut symbols = String::new();
        symbols.push_str(LOWERCASE);
        symbols.push_str(DIGITS);
        symbols.push_str(PUNCTUATION);
        symbols.push(' ');
        Self::from_symbols(&symbols)
    }

    /// The cipher alphabet transforming a symbol class, if the class has one.
    pub fn for_class(class: SymbolClass) -> Option<Self> {
        match class {
            SymbolClass::Lower => Some(Self::lowercase()),
            SymbolClass::Upper => Some(Self::uppercase()),
            SymbolClass::Digit => Some(Self::digits()),
            SymbolClass::Punctuation => Some(Self::punctuation()),
            SymbolClass::Other => None,
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbol at `position`; positions are taken modulo `len()` by callers.
    pub fn symbol(&self, position: usize) -> char {
        self.symbols[position]
    }

    pub fn index_of(&self, symbol: char) -> Option<usize> {
        if !symbol.is_ascii() {
            return None;
        }
        self.index[symbol as usize].map(usize::from)
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.index_of(symbol).is_some()
    }

    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().copied()
    }
}
