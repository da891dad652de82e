use clap::{Parser, Subcommand, ValueHint};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    about,
    version,
    name = "oxdot",
    args_conflicts_with_subcommands = true,
    subcommand_negates_reqs = true
)]
/// Renders OWL ontologies as Graphviz DOT documents
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
    #[command(flatten)]
    pub render: RenderArgs,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the rendering settings with their type and default value
    Settings,
}

#[derive(clap::Args)]
pub struct RenderArgs {
    /// File to read the ontology from
    ///
    /// If no file is given, stdin is used as if it were the input file content.
    /// In this case, the content format must be specified using the --format option.
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub input: Option<PathBuf>,
    /// The format of the input file
    ///
    /// It can be a name like "turtle", an extension like "ttl" or a MIME type like "text/turtle".
    ///
    /// By default, the format is guessed from the input file extension.
    #[arg(long, required_unless_present = "input")]
    pub format: Option<String>,
    /// Base IRI of the input file
    #[arg(long, value_hint = ValueHint::Url)]
    pub base: Option<String>,
    /// File to write the DOT document to
    ///
    /// If no file is given, stdout is used.
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,
    /// Only render these entities and the entities they are linked to
    ///
    /// Entities are given by IRI or prefixed name, like "ex:Dog".
    /// The option can be repeated or take a comma-separated list.
    #[arg(short, long, value_delimiter = ',')]
    pub entity: Vec<String>,
    /// Set a rendering setting, like "classColor=red"
    ///
    /// The available settings are listed by the settings subcommand.
    #[arg(short = 'B', long = "set", value_name = "KEY=VALUE")]
    pub settings: Vec<String>,
    /// Add a prefix used to shorten IRIs, like "ex=http://example.com/"
    ///
    /// The prefixes declared in the input file are used too.
    #[arg(long = "prefix", value_name = "PREFIX=NAMESPACE")]
    pub prefixes: Vec<String>,
    /// Add to each class node the table of the properties that apply to its instances
    ///
    /// This is equivalent to setting classPropertiesMap=true
    #[arg(long)]
    pub class_properties: bool,
    /// Log more details on stderr
    ///
    /// Repeat to log even more. The RUST_LOG environment variable takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
