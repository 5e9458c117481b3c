use std::process;

fn main() {
    match sop_doc_cli::run() {
        Ok(code) => process::exit(code),
        Err(err) => {
            println!("sop-doc error: {err}");
            process::exit(1);
        }
    }
}
