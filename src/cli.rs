use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(version)]
pub struct ProgramArguments {
    #[arg(
        short,
        long,
        help = "batch input file path",
        default_value = "input.json"
    )]
    pub input: String,

    #[arg(
        short,
        long,
        help = "report output file path",
        default_value = "output.json"
    )]
    pub output: String,

    #[arg(long = "algorithm", value_enum, default_value = "both")]
    pub algorithm: Algorithm,

    #[arg(
        long,
        help = "suppress the per-graph summary on stdout",
        default_value = "false"
    )]
    pub quiet: bool,
}

#[derive(Clone, ValueEnum, Debug)]
pub enum Algorithm {
    Prim,
    Kruskal,
    Both,
}

impl Algorithm {
    pub fn includes_prim(&self) -> bool {
        match self {
            Self::Prim | Self::Both => true,
            _ => false,
        }
    }
    pub fn includes_kruskal(&self) -> bool {
        match self {
            Self::Kruskal | Self::Both => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        ProgramArguments::command().debug_assert()
    }

    #[test]
    fn both_covers_both_algorithms() {
        assert!(Algorithm::Both.includes_prim());
        assert!(Algorithm::Both.includes_kruskal());
        assert!(Algorithm::Prim.includes_prim());
        assert!(!Algorithm::Prim.includes_kruskal());
        assert!(!Algorithm::Kruskal.includes_prim());
        assert!(Algorithm::Kruskal.includes_kruskal());
    }
}
