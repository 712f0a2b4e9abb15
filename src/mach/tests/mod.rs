use crate::mach::{Event, Listing, Runtime};

mod runtime_test;

fn run(runtime: &mut Runtime) -> String {
    run_cycles(runtime, 5000)
}

fn run_cycles(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped | Event::Exit => break,
            Event::Error(error) => s.push_str(&format!("{}\n", error)),
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Print(ps) => s.push_str(ps),
            Event::Input(ps) => {
                s.push_str(ps);
                break;
            }
            Event::List(ls) => s.push_str(&format!("{}\n", ls)),
            Event::Load(_) | Event::Save(_) | Event::Cls => {}
        }
        prev_running = event == Event::Running;
    }
    s
}

fn listing(lines: &[&str]) -> Listing {
    let mut listing = Listing::default();
    for line in lines {
        listing.load_str(line).unwrap();
    }
    listing
}
