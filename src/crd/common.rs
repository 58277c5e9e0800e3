use std::fmt;

use serde::{Deserialize, Serialize};

/// String-backed enum with a set of known values and an `Other` variant that
/// keeps anything else verbatim, so values pass through the gateway unchanged.
macro_rules! open_string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $text:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// Value outside the known set, including `""`
            Other(String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $( $name::$variant => $text, )+
                    $name::Other(value) => value,
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                let known = match value.as_str() {
                    $( $text => Some($name::$variant), )+
                    _ => None,
                };
                known.unwrap_or($name::Other(value))
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                match value {
                    $name::Other(raw) => raw,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl schemars::JsonSchema for $name {
            fn schema_name() -> String {
                stringify!($name).to_string()
            }

            fn json_schema(gen: &mut schemars::gen::SchemaGenerator) -> schemars::schema::Schema {
                <String as schemars::JsonSchema>::json_schema(gen)
            }

            fn is_referenceable() -> bool {
                false
            }
        }
    };
}

open_string_enum! {
    /// How the target chain node was deployed
    pub enum DeployMethod {
        Helm => "helm",
        PythonOperator => "python",
        CloudConfig => "cloud-config",
    }
}

open_string_enum! {
    /// What the controller does with the node while the job runs
    pub enum Action {
        /// Stop the node, run the job, start it again
        StopAndStart => "StopAndStart",
        /// Run the job against the live node
        Direct => "Direct",
    }
}

open_string_enum! {
    /// Container image pull policy, same values as the core Pod API
    pub enum PullPolicy {
        Always => "Always",
        Never => "Never",
        IfNotPresent => "IfNotPresent",
    }
}

open_string_enum! {
    /// Job status written by the controller. Read back exactly as stored; the
    /// gateway itself only ever produces `active`.
    pub enum JobStatus {
        Active => "active",
        Completed => "completed",
        Failed => "failed",
    }
}

pub(crate) fn is_zero(value: &i64) -> bool {
    *value == 0
}
