//! Community shorthand for champions
//!
//! Keys are already canonical. These cover nicknames and abbreviations that
//! canonical matching alone would miss or resolve to the wrong champion.

static ALIASES: &[(&str, &str)] = &[
    ("khazix", "Khazix"),
    ("kha", "Khazix"),
    ("leesin", "LeeSin"),
    ("evelynn", "Evelynn"),
    ("jarvan", "JarvanIV"),
    ("j4", "JarvanIV"),
    ("velkoz", "Velkoz"),
    ("kaisa", "Kaisa"),
    ("kogmaw", "KogMaw"),
    ("nunu", "Nunu"),
    ("nunuwillump", "Nunu"),
    ("wukong", "MonkeyKing"),
    ("xinzhao", "XinZhao"),
    ("reksai", "RekSai"),
    ("drmundo", "DrMundo"),
    ("masteryi", "MasterYi"),
    ("missfortune", "MissFortune"),
    ("tf", "TwistedFate"),
    ("gp", "Gangplank"),
    ("mundo", "DrMundo"),
    ("yi", "MasterYi"),
];

/// Identifier registered for a canonical alias key
pub fn alias_target(canonical: &str) -> Option<&'static str> {
    ALIASES.iter().find(|(key, _)| *key == canonical).map(|(_, id)| *id)
}

/// All `(alias, identifier)` pairs
pub fn aliases() -> impl Iterator<Item = (&'static str, &'static str)> {
    ALIASES.iter().copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::canon::canonicalize;

    #[test]
    fn test_alias_keys_are_canonical() {
        for (key, _) in aliases() {
            assert_eq!(canonicalize(key), key, "alias key {key} is not canonical");
        }
    }

    #[test]
    fn test_many_to_one() {
        assert_eq!(alias_target("j4"), Some("JarvanIV"));
        assert_eq!(alias_target("jarvan"), Some("JarvanIV"));
        assert_eq!(alias_target("mundo"), alias_target("drmundo"));
        assert_eq!(alias_target("J4"), None);
    }
}
