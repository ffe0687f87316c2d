use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use petgraph::dot::Dot;
use simfa::{machines, NfaDesign, NfaSimulation};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "simfa", about = "Run inputs through small finite automata")]
struct Cli {
    /// Log subset construction and transitions to stderr.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// DFA accepting strings over {a, b} that contain "ab".
    Dfa { inputs: Vec<String> },
    /// NFA accepting strings over {a, b} whose third-from-last character is 'b'.
    Nfa { inputs: Vec<String> },
    /// NFA with free moves accepting runs of 'a' of length divisible by 2 or 3.
    FreeMoves { inputs: Vec<String> },
    /// Convert one of the NFAs to a DFA and compare their verdicts.
    Determinize {
        #[arg(long, value_enum, default_value_t = Machine::Simulation)]
        machine: Machine,
        /// Print the derived DFA as a DOT graph.
        #[arg(long)]
        dot: bool,
        inputs: Vec<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Machine {
    ThirdFromLast,
    FreeMoves,
    Simulation,
}

impl Machine {
    fn design(self) -> NfaDesign<u32, char> {
        match self {
            Machine::ThirdFromLast => machines::third_from_last_is_b(),
            Machine::FreeMoves => machines::multiple_of_two_or_three(),
            Machine::Simulation => machines::simulation_example(),
        }
    }
}

fn verdict(accepted: bool) -> &'static str {
    if accepted { "accepted" } else { "rejected" }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Dfa { inputs } => {
            let dfa = machines::contains_ab()?;
            for input in &inputs {
                let accepted = dfa
                    .accept(input.chars())
                    .with_context(|| format!("cannot run '{}'", input))?;
                println!("{}: {}", input, verdict(accepted));
            }
        }
        Commands::Nfa { inputs } => run_nfa(&machines::third_from_last_is_b(), &inputs),
        Commands::FreeMoves { inputs } => run_nfa(&machines::multiple_of_two_or_three(), &inputs),
        Commands::Determinize { machine, dot, inputs } => determinize(machine, dot, &inputs)?,
    }

    Ok(())
}

fn run_nfa(nfa: &NfaDesign<u32, char>, inputs: &[String]) {
    for input in inputs {
        println!("{}: {}", input, verdict(nfa.accept(input.chars())));
    }
}

fn determinize(machine: Machine, dot: bool, inputs: &[String]) -> Result<()> {
    let nfa = machine.design();
    let simulation = NfaSimulation::new(&nfa);
    let start_states = [*nfa.start_state()].into_iter().collect();
    let subsets = simulation.discover_states_and_rules(start_states);
    info!(machine = ?machine, states = subsets.states().len(), "determinized");

    if dot {
        let graph = subsets
            .to_graph()
            .map(|_, states| states.to_string(), |_, character| character.to_string());
        println!("{}", Dot::new(&graph));
    } else {
        println!("start: {}", subsets.start_state());
        for states in subsets.accept_states() {
            println!("accept: {}", states);
        }
        for rule in subsets.rules() {
            println!("{}", rule);
        }
    }

    let dfa = subsets.into_dfa_design()?;
    for input in inputs {
        let nfa_accepted = nfa.accept(input.chars());
        let dfa_accepted = dfa
            .accept(input.chars())
            .with_context(|| format!("derived DFA cannot run '{}'", input))?;
        println!(
            "{}: nfa {}, dfa {}",
            input,
            verdict(nfa_accepted),
            verdict(dfa_accepted)
        );
    }

    Ok(())
}
