use optarg::{CommandLine, Operand, OperandMode};

fn main() {
    let mut getopt = CommandLine::new()
        .script_name("getopt")
        .options("ab:c::")
        .operand(Operand::new("files", OperandMode::MULTIPLE))
        .build()
        .unwrap();

    match getopt.process_default() {
        Ok(matches) => {
            for (name, value) in matches.options() {
                println!("{name}: {value}");
            }

            println!("operands: {}", matches.operands().join(" "));
        }
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(2);
        }
    }
}
