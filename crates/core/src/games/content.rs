//! Static puzzle content: word lists, quiz questions, and cipher levels

/// Hangman secret words (uppercase A-Z only)
pub const HANGMAN_WORDS: [&str; 23] = [
    "ALGORITHM",
    "BINARY",
    "CACHE",
    "DEBUG",
    "ENCRYPTION",
    "FIREWALL",
    "GITHUB",
    "HARDWARE",
    "INTERFACE",
    "JAVASCRIPT",
    "KERNEL",
    "LATENCY",
    "MAINFRAME",
    "NETWORK",
    "OBJECT",
    "GAMING",
    "NINJA",
    "EDUVERSE",
    "STUDENT",
    "REACT",
    "PYTHON",
    "DATABASE",
    "SERVER",
];

/// Typing vocabulary (lowercase)
pub const TYPING_WORDS: &[&str] = &[
    "react", "redux", "javascript", "frontend", "developer", "coding", "ninja", "eduverse",
    "keyboard", "speed", "algorithm", "component", "interface", "variable", "function",
    "constant", "framework", "library", "browser", "server", "database", "api", "json",
    "promise", "async", "await", "callback", "debugging", "compile", "execute", "binary",
    "style", "design", "animation", "responsive", "mobile", "desktop", "performance",
    "optimize", "deploy", "github", "version", "control", "merge", "branch", "command",
    "terminal", "console", "syntax", "error", "warning", "hook", "state", "effect",
    "context", "router", "navigation", "layout", "grid", "flexbox", "container", "wrapper",
];

/// Memory card faces; each appears twice in a deck
pub const MEMORY_SYMBOLS: [char; 8] = ['♠', '♥', '♦', '♣', '★', '☀', '☂', '♪'];

/// A multiple-choice trivia question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub prompt: &'static str,
    pub options: [&'static str; 4],
    /// Index into `options`
    pub answer: u8,
}

pub const TRIVIA_QUESTIONS: [Question; 10] = [
    Question {
        prompt: "What does HTML stand for?",
        options: [
            "Hyper Text Markup Language",
            "High Tech Modern Language",
            "Hyper Transfer Markup Language",
            "Home Tool Markup Language",
        ],
        answer: 0,
    },
    Question {
        prompt: "Which language is React written in?",
        options: ["Python", "Java", "JavaScript", "C++"],
        answer: 2,
    },
    Question {
        prompt: "What is the capital of Japan?",
        options: ["Beijing", "Seoul", "Tokyo", "Bangkok"],
        answer: 2,
    },
    Question {
        prompt: "Which warrior is known as the shadow warrior?",
        options: ["Samurai", "Ninja", "Knight", "Viking"],
        answer: 1,
    },
    Question {
        prompt: "Which symbol selects an ID in CSS?",
        options: [".", "#", "*", "@"],
        answer: 1,
    },
    Question {
        prompt: "In Redux, what updates the state?",
        options: ["Action", "Reducer", "Store", "Dispatcher"],
        answer: 1,
    },
    Question {
        prompt: "What is the largest planet in our solar system?",
        options: ["Earth", "Mars", "Jupiter", "Saturn"],
        answer: 2,
    },
    Question {
        prompt: "Who wrote 'Romeo and Juliet'?",
        options: ["Charles Dickens", "William Shakespeare", "Mark Twain", "Jane Austen"],
        answer: 1,
    },
    Question {
        prompt: "Which of these is a false value in JavaScript?",
        options: ["\"false\"", "[]", "0", "{}"],
        answer: 2,
    },
    Question {
        prompt: "Which hook handles side effects in React?",
        options: ["useState", "useEffect", "useReducer", "useMemo"],
        answer: 1,
    },
];

/// A code-breaker level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CipherLevel {
    pub prompt: &'static str,
    pub answer: &'static str,
    pub hint: &'static str,
}

pub const CIPHER_LEVELS: [CipherLevel; 10] = [
    CipherLevel {
        prompt: "2, 4, 6, 8, ?",
        answer: "10",
        hint: "Add 2",
    },
    CipherLevel {
        prompt: "1, 1, 2, 3, 5, ?",
        answer: "8",
        hint: "Fibonacci",
    },
    CipherLevel {
        prompt: "Binary: 1010 to Decimal",
        answer: "10",
        hint: "8 + 2",
    },
    CipherLevel {
        prompt: "If A=1, B=2, C=3... HELLO=?",
        answer: "85121215",
        hint: "A1...Z26",
    },
    CipherLevel {
        prompt: "Hex: F to Decimal",
        answer: "15",
        hint: "Base 16",
    },
    CipherLevel {
        prompt: "1, 4, 9, 16, ?",
        answer: "25",
        hint: "Squares",
    },
    CipherLevel {
        prompt: "What comes next: M, T, W, T, F, ?",
        answer: "S",
        hint: "Weekdays",
    },
    CipherLevel {
        prompt: "1111 + 1 = ? (Binary)",
        answer: "10000",
        hint: "Binary Addition",
    },
    CipherLevel {
        prompt: "2 * 3 + 4 * 0 = ?",
        answer: "6",
        hint: "BODMAS",
    },
    CipherLevel {
        prompt: "x = 5; y = 2; x % y = ?",
        answer: "1",
        hint: "Modulus",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hangman_words_are_uppercase_letters() {
        for word in HANGMAN_WORDS {
            assert!(word.chars().all(|c| c.is_ascii_uppercase()), "{word}");
        }
    }

    #[test]
    fn trivia_answers_index_an_option() {
        for q in TRIVIA_QUESTIONS {
            assert!((q.answer as usize) < q.options.len());
        }
    }

    #[test]
    fn typing_words_have_no_spaces() {
        for word in TYPING_WORDS.iter() {
            assert!(!word.is_empty() && !word.contains(' '));
        }
    }
}
