//! Authored cat art, one table per category.
//!
//! Tables are kept in declaration order; that order is what key listings and
//! error messages report. Art carries no leading or trailing newline. Face art
//! is a single line without spaces so parades stay splittable.

pub const SLEEPING_CAT: &str = r#"      |\      _,,,---,,_
ZZZzz /,`.-'`'    -.  ;-;;,_
     |,4-  ) )-,_. ,\ (  `'-'
    '---''(_/--'  `-'\_)"#;

pub const MOOD_CATS: &[(&str, &str)] = &[
    (
        "standard",
        r#" /\_/\
( o.o )
 > ^ <"#,
    ),
    (
        "happy",
        r#" /\_/\
( ^.^ )
 > ^ <"#,
    ),
    (
        "sad",
        r#" /\_/\
( ;.; )
 > n <"#,
    ),
    (
        "sleepy",
        r#" /\_/\
( -.- ) zZ
 > ^ <"#,
    ),
    (
        "excited",
        r#" /\_/\
( *o* ) !!
 / ^ \"#,
    ),
    (
        "angry",
        r#" /\_/\
( >.< ) #
 /|x|\"#,
    ),
    (
        "curious",
        r#" /\_/\
( o.O ) ?
 > ^ <"#,
    ),
    (
        "love",
        r#" /\_/\
( *-* ) <3
 > ^ <"#,
    ),
    (
        "wink",
        r#" /\_/\
( ^.~ )
 > ^ <"#,
    ),
    (
        "surprised",
        r#" /\_/\
( O.O )
 > o <"#,
    ),
];

pub const CAT_FACES: &[(&str, &str)] = &[
    ("standard", "(=^.^=)"),
    ("happy", "(=^_^=)"),
    ("wink", "(=^.~=)"),
    ("love", "(=*3*=)"),
    ("sleepy", "(=-.-=)zZ"),
    ("excited", "(=^o^=)!"),
    ("sad", "(=;_;=)"),
    ("surprised", "(=O.O=)"),
];

pub const KITTENS: &[(&str, &str)] = &[
    (
        "standard",
        r#" /\_/\
(=o.o=)
 (")(")"#,
    ),
    (
        "playful",
        r#"  /\_/\
 ( ^o^ )
 /  >  \~
(__)-(__)"#,
    ),
    (
        "sleepy",
        r#"  |\__/,|   (`\
  |_ _  |.--.) )
  ( T   )     /
 (((^_(((/(((_/"#,
    ),
];

pub const BIG_CATS: &[(&str, &str)] = &[
    (
        "sitting",
        r#"    /\_____/\
   /  o   o  \
  ( ==  ^  == )
   )         (
  (           )
 ( (  )   (  ) )
(__(__)___(__)__)"#,
    ),
    (
        "standing",
        r#"  /\_/\
 ( o.o )______
  >   ^       \
   \  ______  /
    ||      ||
    ||      ||"#,
    ),
    (
        "stretching",
        r#" /\_/\
( -.- )________________
 \_  _________________ )
   \\                \\"#,
    ),
    (
        "playing",
        r#"   /\_/\     o
  ( o.o )   /
  /> ~ <\__/
 (_)___(_)"#,
    ),
    (
        "loaf",
        r#"  /\_/\
 ( o.o )
(  ___  )
 `-----'"#,
    ),
];

pub const ACTION_CATS: &[(&str, &str)] = &[
    (
        "running",
        r#"    /\_/\
 __( o.o )
/  _) > ^ <
\_/ \_____/\
   \_)   (_/"#,
    ),
    ("sleeping", SLEEPING_CAT),
    (
        "pouncing",
        r#"      /\_/\
 ____( >.< )
/ __   ___  \__
\_) \_)  \_)  _)"#,
    ),
    (
        "hunting",
        r#"   /\_/\        .
  ( o.o )  ~   <`)))><
  /  ^  \___
 (__)__(__)_)"#,
    ),
];
