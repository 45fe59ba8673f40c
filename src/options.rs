use std::time::Duration;

pub struct Args {
    matches: getopts::Matches,
}

impl Args {
    fn new<T: AsRef<str>>(args: &[T]) -> Option<Self> {
        let mut opts = getopts::Options::new();
        opts.optflag("", "help", "print this help menu");
        opts.optflag("c", "console", "run in console mode");
        opts.optflag("t", "threads", "enables multi-threading");
        opts.optopt("w", "width", "set grid width", "WIDTH");
        opts.optopt("h", "height", "set grid height", "HEIGHT");
        opts.optopt("p", "p-alive", "per-cell probability of starting alive", "PROB");
        opts.optopt("", "seed", "seed the random fill for reproducible boards", "N");
        opts.optopt(
            "s",
            "sleep",
            "the amount of time to sleep between generations",
            "MILLIS",
        );
        opts.optopt("g", "gens", "number of generations to advance", "COUNT");

        let matches = opts.parse(args.iter().map(T::as_ref)).unwrap();
        if matches.opt_present("help") {
            println!("{}", opts.usage("usage: torlife [options]"));
            None
        } else {
            Some(Self { matches })
        }
    }
    pub fn from_env() -> Option<Self> {
        let env = std::env::args().collect::<Vec<_>>();
        Self::new(&env[1..])
    }

    fn width(&self) -> Option<usize> {
        self.matches.opt_get("width").unwrap()
    }
    fn height(&self) -> Option<usize> {
        self.matches.opt_get("height").unwrap()
    }

    pub fn console(&self) -> bool {
        self.matches.opt_present("console")
    }
    pub fn multithreading(&self) -> bool {
        self.matches.opt_present("threads")
    }

    pub fn generations(&self) -> usize {
        match self.matches.opt_get("gens").unwrap() {
            Some(count) => count,
            None if self.console() => usize::MAX, // run until interrupted
            None => 1,
        }
    }
    pub fn sleep(&self) -> Option<Duration> {
        match self.matches.opt_get("sleep").unwrap() {
            Some(millis) => Some(Duration::from_millis(millis)),
            None if self.console() => Some(Duration::from_millis(100)),
            None => None,
        }
    }

    pub fn p_alive(&self) -> f64 {
        self.matches.opt_get("p-alive").unwrap().unwrap_or(0.3)
    }
    pub fn seed(&self) -> Option<u64> {
        self.matches.opt_get("seed").unwrap()
    }

    pub fn grid_size(&self) -> (usize, usize) {
        let default = if self.console() {
            let (cols, rows) = crossterm::terminal::size().unwrap();
            // keep the last terminal row free for the report footer
            (cols as usize, rows.saturating_sub(1).max(1) as usize)
        } else {
            (60, 20)
        };

        (
            self.width().unwrap_or(default.0),
            self.height().unwrap_or(default.1),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Args {
        Args::new(list).expect("non-help args")
    }

    #[test]
    fn p_alive_parses_and_defaults() {
        assert_eq!(args(&["--p-alive", "0.75"]).p_alive(), 0.75);
        assert_eq!(args(&[]).p_alive(), 0.3);
    }

    #[test]
    fn seed_is_optional() {
        assert_eq!(args(&["--seed", "42"]).seed(), Some(42));
        assert_eq!(args(&[]).seed(), None);
    }

    #[test]
    fn generations_default_is_one_step() {
        assert_eq!(args(&[]).generations(), 1);
        assert_eq!(args(&["--gens", "12"]).generations(), 12);
    }

    #[test]
    fn explicit_size_overrides_default() {
        let (width, height) = args(&["-w", "11", "-h", "7"]).grid_size();

        assert_eq!((width, height), (11, 7));
    }

    #[test]
    fn sleep_only_defaults_in_console_mode() {
        assert_eq!(args(&[]).sleep(), None);
        assert_eq!(args(&["-c"]).sleep(), Some(Duration::from_millis(100)));
        assert_eq!(
            args(&["--sleep", "250"]).sleep(),
            Some(Duration::from_millis(250))
        );
    }
}
