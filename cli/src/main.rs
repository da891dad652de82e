use crate::cli::{Args, Command, RenderArgs};
use anyhow::{Context, bail};
use clap::Parser;
use oxdot::{RenderConfig, Setting, Visualizer};
use oxowl::{Ontology, OntologyParser};
use oxrdfio::RdfFormat;
use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod cli;

/// Formats matched by their name.
const NAMED_FORMATS: [RdfFormat; 6] = [
    RdfFormat::Turtle,
    RdfFormat::NTriples,
    RdfFormat::NQuads,
    RdfFormat::TriG,
    RdfFormat::N3,
    RdfFormat::RdfXml,
];

pub fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    match args.command {
        Some(Command::Settings) => print_settings(io::stdout().lock()),
        None => {
            init_logging(args.render.verbose);
            render(args.render)
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();
}

fn render(args: RenderArgs) -> anyhow::Result<()> {
    let config = build_config(&args)?;
    let ontology = load(&args)?;
    info!(triples = ontology.len(), "Loaded the ontology");

    let mut visualizer = Visualizer::new(&ontology)
        .with_config(config)
        .with_entities(args.entity);
    if !args.prefixes.is_empty() {
        let mut prefixes = ontology.prefixes().clone();
        for prefix in &args.prefixes {
            let (name, namespace) = split_pair(prefix, "--prefix")?;
            prefixes
                .add(name, namespace)
                .with_context(|| format!("Invalid prefix {prefix}"))?;
        }
        visualizer = visualizer.with_prefixes(prefixes);
    }

    if let Some(output) = &args.output {
        let file = File::create(output)
            .with_context(|| format!("Error while opening file {}", output.display()))?;
        close_file_writer(visualizer.write(BufWriter::new(file))?)?;
        debug!(output = %output.display(), "Wrote the DOT document");
    } else {
        visualizer.write(io::stdout().lock())?;
    }
    Ok(())
}

fn build_config(args: &RenderArgs) -> anyhow::Result<RenderConfig> {
    let mut builder = RenderConfig::builder();
    if args.class_properties {
        builder = builder.set(Setting::ClassPropertiesMap, true);
    }
    for setting in &args.settings {
        let (key, value) = split_pair(setting, "--set")?;
        builder = builder
            .set_raw(key, value)
            .with_context(|| format!("Invalid setting {setting}"))?;
    }
    Ok(builder.build()?)
}

fn load(args: &RenderArgs) -> anyhow::Result<Ontology> {
    let format = if let Some(format) = &args.format {
        rdf_format_from_name(format)?
    } else if let Some(input) = &args.input {
        rdf_format_from_path(input)?
    } else {
        bail!("The --format option must be set when reading from stdin")
    };
    let mut parser = OntologyParser::from_format(format);
    if let Some(base) = &args.base {
        parser = parser
            .with_base_iri(base)
            .with_context(|| format!("Invalid base IRI {base}"))?;
    }
    if let Some(input) = &args.input {
        let file = File::open(input)
            .with_context(|| format!("Error while opening file {}", input.display()))?;
        parse(parser, BufReader::new(file))
            .with_context(|| format!("Error while loading file {}", input.display()))
    } else {
        parse(parser, io::stdin().lock()).context("Error while loading stdin")
    }
}

fn parse(parser: OntologyParser, reader: impl Read) -> anyhow::Result<Ontology> {
    Ok(parser.parse_reader(reader)?)
}

fn print_settings(mut out: impl Write) -> anyhow::Result<()> {
    for setting in Setting::ALL {
        writeln!(
            out,
            "{}\t{}\t{}",
            setting.key(),
            setting.value_type(),
            setting.default_value()
        )?;
    }
    out.flush()?;
    Ok(())
}

fn split_pair<'a>(pair: &'a str, option: &str) -> anyhow::Result<(&'a str, &'a str)> {
    pair.split_once('=')
        .with_context(|| format!("The {option} value '{pair}' must have the form key=value"))
}

fn format_from_path<T>(
    path: &Path,
    from_extension: impl FnOnce(&str) -> anyhow::Result<T>,
) -> anyhow::Result<T> {
    if let Some(ext) = path.extension().and_then(OsStr::to_str) {
        from_extension(ext).map_err(|e| {
            e.context(format!(
                "Not able to guess the file format from file name extension '{ext}'"
            ))
        })
    } else {
        bail!(
            "The path {} has no extension to guess a file format from",
            path.display()
        )
    }
}

fn rdf_format_from_path(path: &Path) -> anyhow::Result<RdfFormat> {
    format_from_path(path, |ext| {
        RdfFormat::from_extension(ext)
            .with_context(|| format!("The file extension '{ext}' is unknown"))
    })
}

fn rdf_format_from_name(name: &str) -> anyhow::Result<RdfFormat> {
    if let Some(t) = NAMED_FORMATS
        .into_iter()
        .find(|f| f.name().eq_ignore_ascii_case(name))
    {
        return Ok(t);
    }
    if let Some(t) = RdfFormat::from_extension(name) {
        return Ok(t);
    }
    if let Some(t) = RdfFormat::from_media_type(name) {
        return Ok(t);
    }
    bail!("The file format '{name}' is unknown")
}

fn close_file_writer(writer: BufWriter<File>) -> io::Result<()> {
    let mut file = writer
        .into_inner()
        .map_err(io::IntoInnerError::into_error)?;
    file.flush()?;
    file.sync_all()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::panic_in_result_fn)]

    use super::*;

    #[test]
    fn format_guessing() -> anyhow::Result<()> {
        assert_eq!(rdf_format_from_name("turtle")?, RdfFormat::Turtle);
        assert_eq!(rdf_format_from_name("ttl")?, RdfFormat::Turtle);
        assert_eq!(rdf_format_from_name("application/n-triples")?, RdfFormat::NTriples);
        assert_eq!(rdf_format_from_path(Path::new("pizza.owl.rdf"))?, RdfFormat::RdfXml);
        assert!(rdf_format_from_name("foo").is_err(), "unknown format name");
        assert!(rdf_format_from_path(Path::new("pizza")).is_err(), "missing extension");
        Ok(())
    }

    #[test]
    fn key_value_pairs() -> anyhow::Result<()> {
        assert_eq!(split_pair("classColor=red", "--set")?, ("classColor", "red"));
        assert_eq!(
            split_pair("ex=http://example.com/?a=b", "--prefix")?,
            ("ex", "http://example.com/?a=b")
        );
        assert!(split_pair("classColor", "--set").is_err(), "missing value");
        Ok(())
    }

    #[test]
    fn settings_listing() -> anyhow::Result<()> {
        let mut out = Vec::new();
        print_settings(&mut out)?;
        let out = String::from_utf8(out)?;
        assert_eq!(out.lines().count(), Setting::ALL.len());
        assert!(out.starts_with("classPropertiesMap\tboolean\tfalse\n"));
        assert!(out.contains("literalRowLength\tinteger\t42\n"));
        Ok(())
    }
}
