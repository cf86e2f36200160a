use anyhow::Context;
use argh::FromArgs;
use quotelist::Strategy;
use strum::IntoEnumIterator;

const SAMPLE_ITEMS: [&str; 3] = ["apple", "banana", "orange"];

#[derive(FromArgs)]
/// Join items into a comma-separated list, wrapping each one in a quote string.
struct Args {
    /// the items to join; a sample list is used when none are given
    #[argh(positional)]
    items: Vec<String>,

    /// the string to wrap each item in; occurrences of it inside an item are escaped with a backslash
    #[argh(option, short = 'q', default = "String::from(\"\\\"\")")]
    quote: String,

    /// how the list is assembled: `builder`, `interpolated` or `joined`
    #[argh(option, short = 's', default = "Strategy::default()")]
    strategy: Strategy,

    /// print the list produced by every strategy instead of a single one
    #[argh(switch)]
    compare: bool,
}

impl Args {
    fn items(&self) -> Vec<&str> {
        if self.items.is_empty() {
            log::debug!("no items provided, using sample list");
            return SAMPLE_ITEMS.to_vec();
        }

        self.items.iter().map(String::as_str).collect()
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Args = argh::from_env();
    let items = args.items();

    if !args.compare {
        let list = args
            .strategy
            .quote_list(&items, &args.quote)
            .context("failed to format items")?;

        println!("{list}");
        return Ok(());
    }

    for strategy in Strategy::iter() {
        let list = strategy
            .quote_list(&items, &args.quote)
            .with_context(|| format!("failed to format items using the `{strategy}` strategy"))?;

        println!("{strategy}: {list}");
    }

    Ok(())
}
