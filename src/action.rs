use crate::Error;
use crate::Target;

/// What to do with a target table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Action {
    /// Move the foreign table aside and copy its rows into a local table
    /// under the original name.
    #[default]
    Create,
    /// Replace the local rows with a fresh copy of the foreign rows.
    Refresh,
    /// Drop the local table and give the foreign table its name back.
    Revert,
}

impl Action {
    pub const ALL: [Self; 3] = [Self::Create, Self::Refresh, Self::Revert];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Refresh => "refresh",
            Self::Revert => "revert",
        }
    }

    /// Ordered statements this action runs against `target`.
    pub fn plan(&self, target: &Target) -> Vec<String> {
        let local = target.local_qualified();
        let foreign = target.foreign_qualified();
        match self {
            Self::Create => vec![
                format!("ALTER FOREIGN TABLE {} RENAME TO {}", local, target.foreign_bare()),
                format!("CREATE TABLE {} (LIKE {} INCLUDING ALL)", local, foreign),
                format!("INSERT INTO {} SELECT * FROM {}", local, foreign),
            ],
            Self::Refresh => vec![
                format!("TRUNCATE TABLE {}", local),
                format!("INSERT INTO {} SELECT * FROM {}", local, foreign),
            ],
            Self::Revert => vec![
                format!("DROP TABLE {}", local),
                format!("ALTER FOREIGN TABLE {} RENAME TO {}", foreign, target.local_bare()),
            ],
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Action {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| Error::UnknownAction(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target() -> Target {
        Target::new("S", "T").unwrap()
    }

    #[test]
    fn create_plan() {
        assert!(
            Action::Create.plan(&target())
                == vec![
                    r#"ALTER FOREIGN TABLE "S"."T" RENAME TO "T_foreign""#,
                    r#"CREATE TABLE "S"."T" (LIKE "S"."T_foreign" INCLUDING ALL)"#,
                    r#"INSERT INTO "S"."T" SELECT * FROM "S"."T_foreign""#,
                ]
        );
    }

    #[test]
    fn refresh_plan() {
        assert!(
            Action::Refresh.plan(&target())
                == vec![
                    r#"TRUNCATE TABLE "S"."T""#,
                    r#"INSERT INTO "S"."T" SELECT * FROM "S"."T_foreign""#,
                ]
        );
    }

    #[test]
    fn revert_plan() {
        assert!(
            Action::Revert.plan(&target())
                == vec![
                    r#"DROP TABLE "S"."T""#,
                    r#"ALTER FOREIGN TABLE "S"."T_foreign" RENAME TO "T""#,
                ]
        );
    }

    #[test]
    fn plan_quotes_hostile_names() {
        let target = Target::new("pub\"lic", "o\"rder").unwrap();
        let plan = Action::Revert.plan(&target);
        assert!(plan[0] == r#"DROP TABLE "pub""lic"."o""rder""#);
        assert!(plan[1] == r#"ALTER FOREIGN TABLE "pub""lic"."o""rder_foreign" RENAME TO "o""rder""#);
    }

    #[test]
    fn names_round_trip() {
        for action in Action::ALL {
            assert!(action.to_string().parse::<Action>().unwrap() == action);
        }
    }

    #[test]
    fn default_is_create() {
        assert!(Action::default() == Action::Create);
    }

    #[test]
    fn unknown_name_is_rejected() {
        for name in ["rebuild", "", "Create", " create"] {
            match name.parse::<Action>() {
                Err(Error::UnknownAction(s)) => assert!(s == name),
                _ => panic!("accepted {:?}", name),
            }
        }
    }
}
