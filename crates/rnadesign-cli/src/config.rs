use crate::cli::DesignArgs;
use crate::error::{CliError, Result};
use rnadesign::engine::config as core_config;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialDesignSection {
    seed: Option<u64>,
    count: Option<usize>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
struct PartialPreferenceSection {
    #[serde(rename = "type")]
    kind: Option<PreferenceKind>,
    gc_to_au: Option<f64>,
    beta: Option<f64>,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
enum PreferenceKind {
    Ratio,
    Boltzmann,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialDesignConfig {
    design: Option<PartialDesignSection>,
    preference: Option<PartialPreferenceSection>,
}

impl PartialDesignConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn merge_with_cli(mut self, args: &DesignArgs) -> Result<core_config::DesignConfig> {
        self.apply_set_values(&args.set_values)?;

        let design = self.design.take().unwrap_or_default();
        let preference = Self::merge_preference(args, self.preference.take())?;

        let mut builder = core_config::DesignConfigBuilder::new()
            .seed(args.seed.or(design.seed))
            .num_designs(args.count.or(design.count).unwrap_or(1));
        if let Some(preference) = preference {
            builder = builder.preference(preference);
        }

        builder.build().map_err(|e| CliError::Config(e.to_string()))
    }

    fn merge_preference(
        args: &DesignArgs,
        partial: Option<PartialPreferenceSection>,
    ) -> Result<Option<core_config::PairPreference>> {
        if let Some(gc_to_au) = args.gc_preference {
            return Ok(Some(core_config::PairPreference::Ratio { gc_to_au }));
        }
        if let Some(beta) = args.beta {
            return Ok(Some(core_config::PairPreference::Boltzmann { beta }));
        }
        let Some(p) = partial else {
            return Ok(None);
        };

        let kind = match (p.kind, p.gc_to_au, p.beta) {
            (Some(kind), _, _) => kind,
            (None, Some(_), None) => PreferenceKind::Ratio,
            (None, None, Some(_)) => PreferenceKind::Boltzmann,
            (None, None, None) => return Ok(None),
            (None, Some(_), Some(_)) => {
                return Err(CliError::Config(
                    "`preference` sets both `gc-to-au` and `beta`; add `type` to choose one"
                        .to_string(),
                ));
            }
        };

        let preference = match kind {
            PreferenceKind::Ratio => core_config::PairPreference::Ratio {
                gc_to_au: p.gc_to_au.ok_or_else(|| {
                    CliError::Config("`preference` of type 'ratio' requires `gc-to-au`".to_string())
                })?,
            },
            PreferenceKind::Boltzmann => core_config::PairPreference::Boltzmann {
                beta: p.beta.ok_or_else(|| {
                    CliError::Config("`preference` of type 'boltzmann' requires `beta`".to_string())
                })?,
            },
        };
        Ok(Some(preference))
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };

            match key {
                "design.seed" => {
                    self.design.get_or_insert_with(Default::default).seed =
                        Some(parse_value(key, value_str)?);
                }
                "design.count" => {
                    self.design.get_or_insert_with(Default::default).count =
                        Some(parse_value(key, value_str)?);
                }
                "preference.gc-to-au" => {
                    let section = self.preference.get_or_insert_with(Default::default);
                    section.kind = Some(PreferenceKind::Ratio);
                    section.gc_to_au = Some(parse_value(key, value_str)?);
                    section.beta = None;
                }
                "preference.beta" => {
                    let section = self.preference.get_or_insert_with(Default::default);
                    section.kind = Some(PreferenceKind::Boltzmann);
                    section.beta = Some(parse_value(key, value_str)?);
                    section.gc_to_au = None;
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value_str: &str) -> Result<T> {
    value_str
        .parse()
        .map_err(|_| CliError::Config(format!("Invalid value for {}: {}", key, value_str)))
}
