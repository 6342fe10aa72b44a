#[doc(hidden)]
#[macro_export]
/// Implements simple two variants enum parsed from a set of case-insensitive names
macro_rules! bool_enum {
    (
        $(#[$meta:meta])*
        $name:ident:
        $(#[$t_meta:meta])* $truthy:ident = $true_name:literal $(| $true_alias:literal)*
        and
        $(#[$f_meta:meta])* $falsy:ident = $false_name:literal $(| $false_alias:literal)*;
        parse with $parse_err:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $(#[$t_meta])*
            $truthy,
            $(#[$f_meta])*
            $falsy,
        }

        impl From<bool> for $name {
            fn from(val: bool) -> Self {
                if val {
                    Self::$truthy
                } else {
                    Self::$falsy
                }
            }
        }

        #[doc = concat!("The string does not name any `", stringify!($name), "`")]
        #[derive(Debug, Clone, PartialEq, Eq, ::thiserror::Error)]
        #[error("Cannot parse {} from {:?}", stringify!($name), .failed)]
        pub struct $parse_err {
            failed: String,
        }

        impl ::std::str::FromStr for $name {
            type Err = $parse_err;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $true_name $(| $true_alias)* => Ok(Self::$truthy),
                    $false_name $(| $false_alias)* => Ok(Self::$falsy),
                    _ => Err($parse_err {
                        failed: s.to_string(),
                    }),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let name = match self {
                    Self::$truthy => $true_name,
                    Self::$falsy => $false_name,
                };
                write!(f, "{}", name)
            }
        }

        #[cfg(feature = "serde")]
        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                s.parse().map_err(<D::Error as ::serde::de::Error>::custom)
            }
        }
    };
}

bool_enum!(
    /// The sense in which the stations of a closed traverse are numbered
    TraverseDirection:
    /// Right-handed traverse
    Clockwise = "clockwise" | "cw" | "right"
    and
    /// Left-handed traverse
    AntiClockwise = "anti-clockwise" | "anticlockwise" | "counter-clockwise" | "acw" | "ccw" | "left";
    parse with ParseDirectionError
);

bool_enum!(
    /// How a bearing is written down
    BearingSystem:
    /// Whole Circle Bearing, 0..360 clockwise from the north
    WholeCircle = "wcb" | "whole-circle"
    and
    /// Quadrantal Bearing System, 0..=90 from the meridian plus a quadrant
    Quadrantal = "qbs" | "quadrantal";
    parse with ParseBearingSystemError
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_direction_aliases() {
        assert_eq!(
            "Clockwise".parse::<TraverseDirection>().unwrap(),
            TraverseDirection::Clockwise
        );
        assert_eq!(
            " CW".parse::<TraverseDirection>().unwrap(),
            TraverseDirection::Clockwise
        );
        assert_eq!(
            "anticlockwise".parse::<TraverseDirection>().unwrap(),
            TraverseDirection::AntiClockwise
        );
        assert_eq!(
            "ccw".parse::<TraverseDirection>().unwrap(),
            TraverseDirection::AntiClockwise
        );
    }

    #[test]
    #[should_panic(expected = "Cannot parse TraverseDirection from \"sideways\"")]
    fn parse_direction_bad() {
        let _d: TraverseDirection = "sideways".parse().unwrap();
    }

    #[test]
    fn direction_display_round_trips() {
        for direction in [TraverseDirection::Clockwise, TraverseDirection::AntiClockwise] {
            assert_eq!(direction.to_string().parse::<TraverseDirection>().unwrap(), direction);
        }
    }

    #[test]
    fn bearing_system() {
        assert_eq!("WCB".parse::<BearingSystem>().unwrap(), BearingSystem::WholeCircle);
        assert_eq!("quadrantal".parse::<BearingSystem>().unwrap(), BearingSystem::Quadrantal);
        assert_eq!(BearingSystem::Quadrantal.to_string(), "qbs");
        assert_eq!(BearingSystem::from(true), BearingSystem::WholeCircle);
    }
}
