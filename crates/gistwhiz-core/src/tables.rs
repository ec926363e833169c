//! Static lookup tables used by the comparison pipeline.
//!
//! All tables are built once on first access and never mutated afterwards,
//! so they can be shared freely across threads.

use std::collections::{HashMap, HashSet};

lazy_static::lazy_static! {
    /// Unit prefix symbol → multiplicative scale factor.
    ///
    /// Keys are case-sensitive. Several spellings may share a factor
    /// ("µ", "μ", "u", "mc", "micro" all mean 1e-6).
    pub static ref UNIT_PREFIXES: HashMap<&'static str, f64> = {
        let mut m = HashMap::new();
        // SI prefixes
        m.insert("y", 1e-24);
        m.insert("z", 1e-21);
        m.insert("a", 1e-18);
        m.insert("f", 1e-15);
        m.insert("p", 1e-12);
        m.insert("n", 1e-9);
        m.insert("μ", 1e-6);
        m.insert("µ", 1e-6);
        m.insert("u", 1e-6);
        m.insert("m", 1e-3);
        m.insert("c", 1e-2);
        m.insert("d", 1e-1);
        m.insert("da", 1e1);
        m.insert("h", 1e2);
        m.insert("k", 1e3);
        m.insert("M", 1e6);
        m.insert("G", 1e9);
        m.insert("T", 1e12);
        m.insert("P", 1e15);
        m.insert("E", 1e18);
        m.insert("Z", 1e21);
        m.insert("Y", 1e24);

        // Long-form aliases
        m.insert("hundred", 1e2);
        m.insert("thousand", 1e3);
        m.insert("million", 1e6);
        m.insert("billion", 1e9);
        m.insert("trillion", 1e12);
        m.insert("quadrillion", 1e15);
        m.insert("quintillion", 1e18);

        // Binary prefixes
        m.insert("Ki", 1024_f64);
        m.insert("Mi", 1024_f64.powi(2));
        m.insert("Gi", 1024_f64.powi(3));
        m.insert("Ti", 1024_f64.powi(4));
        m.insert("Pi", 1024_f64.powi(5));
        m.insert("Ei", 1024_f64.powi(6));

        // Informal spellings seen in real answers
        m.insert("mc", 1e-6);
        m.insert("meg", 1e6);
        m.insert("kilo", 1e3);
        m.insert("mega", 1e6);
        m.insert("giga", 1e9);
        m.insert("tera", 1e12);
        m.insert("micro", 1e-6);
        m.insert("nano", 1e-9);
        m.insert("milli", 1e-3);
        m.insert("centi", 1e-2);
        m
    };

    /// Base unit name or abbreviation → canonical base unit.
    ///
    /// Only unprefixed forms belong here; "kg" is resolved by the quantity
    /// parser as prefix "k" on base "g".
    pub static ref UNIT_BASES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        // Mass
        m.insert("g", "gram");
        m.insert("gram", "gram");
        m.insert("grams", "gram");
        m.insert("gramme", "gram");
        m.insert("grammes", "gram");

        // Length
        m.insert("m", "meter");
        m.insert("meter", "meter");
        m.insert("meters", "meter");
        m.insert("metre", "meter");
        m.insert("metres", "meter");

        // Volume
        m.insert("l", "liter");
        m.insert("liter", "liter");
        m.insert("liters", "liter");
        m.insert("litre", "liter");
        m.insert("litres", "liter");

        // Time
        m.insert("s", "second");
        m.insert("sec", "second");
        m.insert("secs", "second");
        m.insert("second", "second");
        m.insert("seconds", "second");
        m.insert("min", "minute");
        m.insert("mins", "minute");
        m.insert("minute", "minute");
        m.insert("minutes", "minute");
        m.insert("hr", "hour");
        m.insert("hrs", "hour");
        m.insert("hour", "hour");
        m.insert("hours", "hour");

        // Amount of substance
        m.insert("mol", "mole");
        m.insert("mole", "mole");
        m.insert("moles", "mole");

        // Electrical
        m.insert("v", "volt");
        m.insert("volt", "volt");
        m.insert("volts", "volt");
        m.insert("w", "watt");
        m.insert("watt", "watt");
        m.insert("watts", "watt");
        m.insert("amp", "ampere");
        m.insert("amps", "ampere");
        m.insert("ampere", "ampere");
        m.insert("amperes", "ampere");

        // Energy, force, pressure, frequency
        m.insert("j", "joule");
        m.insert("joule", "joule");
        m.insert("joules", "joule");
        m.insert("cal", "calorie");
        m.insert("calorie", "calorie");
        m.insert("calories", "calorie");
        m.insert("n", "newton");
        m.insert("newton", "newton");
        m.insert("newtons", "newton");
        m.insert("pa", "pascal");
        m.insert("pascal", "pascal");
        m.insert("pascals", "pascal");
        m.insert("hz", "hertz");
        m.insert("hertz", "hertz");

        // Data
        m.insert("b", "byte");
        m.insert("byte", "byte");
        m.insert("bytes", "byte");
        m.insert("bit", "bit");
        m.insert("bits", "bit");
        m
    };

    /// Surface token → canonical token. Lookups are single-hop.
    pub static ref SYNONYMS: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("heart", "cardiac");
        m.insert("photo", "picture");
        m.insert("picture", "photo");
        m
    };

    /// Spelled-out integers rewritten to digits.
    pub static ref WORD_NUMBERS: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("zero", "0");
        m.insert("one", "1");
        m.insert("two", "2");
        m.insert("three", "3");
        m.insert("four", "4");
        m.insert("five", "5");
        m.insert("six", "6");
        m.insert("seven", "7");
        m.insert("eight", "8");
        m.insert("nine", "9");
        m.insert("ten", "10");
        m
    };

    /// Tokens ignored for matching purposes.
    pub static ref FILLER_WORDS: HashSet<&'static str> =
        ["the", "of", "a", "an"].into_iter().collect();
}
