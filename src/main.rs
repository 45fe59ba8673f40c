use std::{io, thread};

mod console;
mod options;
mod stats;

use rand::SeedableRng;
use rand::rngs::StdRng;
use stats::Recorder;
use torlife::Grid;

fn args_to_grid(args: &options::Args) -> Grid {
    let (width, height) = args.grid_size();
    let p_alive = args.p_alive();

    // seeded runs reproduce the same board, otherwise use the thread rng
    let seeded = match args.seed() {
        Some(seed) => Grid::random(height, width, p_alive, &mut StdRng::seed_from_u64(seed)),
        None => Grid::random(height, width, p_alive, &mut rand::rng()),
    };
    match seeded {
        Ok(grid) => grid,
        Err(err) => panic!("invalid p-alive probability {}: {}", p_alive, err),
    }
}

fn main() -> io::Result<()> {
    let Some(args) = options::Args::from_env() else {
        panic!("invalid arguments");
    };

    let mut grid = args_to_grid(&args);

    // setup the renderer and reporting metrics
    let mut console = if args.console() {
        Some(console::ConsoleRender::new()?)
    } else {
        println!("starting (population: {}):", grid.population());
        print!("{}", grid);
        None
    };
    let sleep = args.sleep();

    let mut stats = stats::SimpleRecord::new(grid.population());
    let mut advanced = 0;
    'generations: for _ in 0..args.generations() {
        // render the console if in console mode
        if let Some(ref mut console) = console {
            while let Some(cmd) = console.poll_events()? {
                match cmd {
                    console::ConsoleCommand::Exit => break 'generations,
                    _ => {}
                }
            }
            console.render(&grid)?;
        }

        // report metrics every 500ms or always if in console mode
        if console.is_some() || stats.has_report() {
            let report = stats.report();
            if let Some(ref mut console) = console {
                console.set_report(report);
            } else {
                println!("{}", report);
            }
        }

        // compute the next generation
        grid = if args.multithreading() {
            grid.step_parallel()
        } else {
            grid.step()
        };
        advanced += 1;
        stats.record(grid.population());
        if let Some(time) = sleep {
            thread::sleep(time);
        }
    }
    std::mem::drop(console);

    println!("after {} generations (population: {}):", advanced, grid.population());
    print!("{}", grid);

    Ok(())
}
