pub mod entity {
    use serde::{Deserialize, Serialize};

    pub type Id = String;

    /// A person in the pool. Attribute values are nominally in `[0, 5]` but are
    /// stored as supplied; the scorer clamps them.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct Participant {
        pub id: Id,
        pub name: String,
        #[serde(default)]
        pub rating: Option<f64>,
        #[serde(default)]
        pub pace: Option<f64>,
        #[serde(default)]
        pub condition: Option<f64>,
        #[serde(default = "default_true")]
        pub participating: bool,
        #[serde(default = "default_true")]
        pub recurring: bool,
    }

    fn default_true() -> bool {
        true
    }

    impl Participant {
        pub fn new(id: impl Into<Id>, name: impl Into<String>) -> Participant {
            Participant {
                id: id.into(),
                name: name.into(),
                rating: None,
                pace: None,
                condition: None,
                participating: true,
                recurring: true,
            }
        }

        pub fn with_attributes(
            mut self,
            rating: Option<f64>,
            pace: Option<f64>,
            condition: Option<f64>,
        ) -> Participant {
            self.rating = rating;
            self.pace = pace;
            self.condition = condition;
            self
        }

        pub fn attributes(&self) -> [Option<f64>; 3] {
            [self.rating, self.pace, self.condition]
        }

        /// Unweighted mean of the attributes that are set and positive, 0 when none are.
        /// Meant for roster display; balancing uses the weighted score instead.
        pub fn average_rating(&self) -> f64 {
            let rated: Vec<f64> =
                self.attributes().into_iter().flatten().filter(|v| *v > 0.0).collect();
            if rated.is_empty() {
                0.0
            } else {
                rated.iter().sum::<f64>() / rated.len() as f64
            }
        }

        /// A participant who is no longer recurring is also taken out of the next draw.
        pub fn set_recurring(&mut self, recurring: bool) {
            self.recurring = recurring;
            if !recurring {
                self.participating = false;
            }
        }

        pub fn is_eligible(&self) -> bool {
            self.participating && self.recurring
        }
    }
}


pub mod condition {
    use serde::{Deserialize, Serialize};

    pub type Score = f64;

    /// Relative importance of each attribute in the weighted score.
    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Weights {
        pub rating: f64,
        pub pace: f64,
        pub condition: f64,
    }

    impl Weights {
        pub fn new(rating: f64, pace: f64, condition: f64) -> Weights {
            Weights { rating, pace, condition }
        }

        pub fn as_array(&self) -> [f64; 3] {
            [self.rating, self.pace, self.condition]
        }

        pub fn total(&self) -> f64 {
            self.rating + self.pace + self.condition
        }
    }

    impl Default for Weights {
        fn default() -> Self {
            Weights { rating: 0.5, pace: 0.3, condition: 0.2 }
        }
    }
}


pub mod group {
    use std::collections::HashSet;
    use std::fmt;

    use serde::{Deserialize, Serialize};

    use super::condition::Score;
    use super::entity::{Id, Participant};

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    pub struct Team {
        pub members: Vec<Participant>,
        pub total_score: Score,
    }

    impl Team {
        pub fn len(&self) -> usize {
            self.members.len()
        }

        pub fn is_empty(&self) -> bool {
            self.members.is_empty()
        }

        pub fn ids(&self) -> HashSet<&str> {
            self.members.iter().map(|m| m.id.as_str()).collect()
        }
    }

    /// Exactly one team per requested slot, in positional order.
    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct Partition {
        pub teams: Vec<Team>,
    }

    impl Partition {
        pub fn new(teams: Vec<Team>) -> Partition {
            Partition { teams }
        }

        pub fn len(&self) -> usize {
            self.teams.len()
        }

        pub fn is_empty(&self) -> bool {
            self.teams.is_empty()
        }

        pub fn iter(&self) -> std::slice::Iter<'_, Team> {
            self.teams.iter()
        }

        pub fn totals(&self) -> Vec<Score> {
            self.teams.iter().map(|t| t.total_score).collect()
        }

        pub fn participant_count(&self) -> usize {
            self.teams.iter().map(Team::len).sum()
        }

        pub fn member_ids(&self) -> Vec<&Id> {
            self.teams.iter().flat_map(|t| t.members.iter().map(|m| &m.id)).collect()
        }
    }

    impl<'a> IntoIterator for &'a Partition {
        type Item = &'a Team;
        type IntoIter = std::slice::Iter<'a, Team>;

        fn into_iter(self) -> Self::IntoIter {
            self.teams.iter()
        }
    }

    impl fmt::Display for Partition {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            for (index, team) in self.teams.iter().enumerate() {
                if index > 0 {
                    writeln!(f)?;
                }
                writeln!(f, "Team {} ({:.2})", index + 1, team.total_score)?;
                for (position, member) in team.members.iter().enumerate() {
                    writeln!(f, "  {}. {}", position + 1, member.name)?;
                }
            }
            Ok(())
        }
    }
}
