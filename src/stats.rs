use std::time::Instant;

pub trait Recorder {
    type Str: AsRef<str>;

    fn record(&mut self, population: usize);

    fn has_report(&self) -> bool;
    fn report(&mut self) -> Self::Str;
}

pub struct SimpleRecord {
    gens: usize,
    population: usize,
    gens_in_report: usize,
    last_report: Instant,
}
impl SimpleRecord {
    pub fn new(population: usize) -> Self {
        Self {
            gens: 0,
            population,
            gens_in_report: 0,
            last_report: Instant::now(),
        }
    }
}
impl Recorder for SimpleRecord {
    type Str = String;

    fn record(&mut self, population: usize) {
        self.gens += 1;
        self.gens_in_report += 1;
        self.population = population;
    }

    fn has_report(&self) -> bool {
        self.last_report.elapsed().as_millis() >= 500
    }
    fn report(&mut self) -> Self::Str {
        let gens_per_sec = self.gens_in_report as f64 / self.last_report.elapsed().as_secs_f64();
        // reset stats for next report
        self.last_report = Instant::now();
        self.gens_in_report = 0;

        format!(
            "{:.02}gen/s gens:{}, population:{}",
            gens_per_sec, self.gens, self.population
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_tracks_generations_and_population() {
        let mut stats = SimpleRecord::new(10);
        stats.record(8);
        stats.record(5);

        let report = stats.report();

        assert!(report.contains("gens:2"));
        assert!(report.contains("population:5"));
    }

    #[test]
    fn no_report_due_immediately() {
        let stats = SimpleRecord::new(0);

        assert!(!stats.has_report());
    }
}
