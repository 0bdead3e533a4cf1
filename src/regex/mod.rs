mod regex;

pub use regex::Regex;
