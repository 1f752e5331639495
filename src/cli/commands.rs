use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// `StyleMind` - learn your blog voice, then draft posts from a photo.
#[derive(Parser, Debug)]
#[command(name = "stylemind")]
#[command(version)]
#[command(about = "Analyze your blog's writing style and draft image-based posts.", long_about = None)]
pub struct Cli {
    /// Backend base address, e.g. http://localhost:8080/api (overrides config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Learn the writing style of one or more published posts
    Analyze {
        /// Blog post URL (repeat for more posts)
        #[arg(short = 'u', long = "url", required = true)]
        urls: Vec<String>,
    },

    /// Analyze the style, then write a new post about a topic and an image
    Compose {
        /// Blog post URL (repeat for more posts)
        #[arg(short = 'u', long = "url", required = true)]
        urls: Vec<String>,

        /// What the new post is about
        #[arg(short, long)]
        topic: String,

        /// Image to describe in the post
        #[arg(short, long)]
        image: String,

        /// Write the markdown here instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Step through both stages with prompts
    Interactive,

    /// Check that the backend is reachable
    Ping,
}

#[cfg(test)]
mod tests {
    use super::{Cli, Commands};
    use clap::{CommandFactory, Parser};

    #[test]
    fn cli_definition_has_no_flag_conflicts() {
        Cli::command().debug_assert();
    }

    #[test]
    fn compose_collects_repeated_urls() {
        let cli = Cli::try_parse_from([
            "stylemind",
            "compose",
            "-u",
            "https://blog.naver.com/me/1",
            "--url",
            "https://me.tistory.com/2",
            "--topic",
            "picnic",
            "--image",
            "~/pics/han.jpg",
        ])
        .unwrap();

        match cli.command {
            Commands::Compose {
                urls, topic, out, ..
            } => {
                assert_eq!(urls.len(), 2);
                assert_eq!(topic, "picnic");
                assert!(out.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn analyze_requires_a_url() {
        assert!(Cli::try_parse_from(["stylemind", "analyze"]).is_err());
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let cli =
            Cli::try_parse_from(["stylemind", "ping", "--api-url", "http://x/api", "-vv"]).unwrap();
        assert_eq!(cli.api_url.as_deref(), Some("http://x/api"));
        assert_eq!(cli.verbose, 2);
    }
}
