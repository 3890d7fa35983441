use truthset::*;

fn main() -> Result<(), TruthsetError> {
    println!("A simple example!");

    let evaluation = evaluate("(A|B)\\C&!D", None)?;
    println!("Operands: {}", evaluation.operands());
    println!("Satisfying assignments: {}", evaluation.result());
    for assignment in evaluation.satisfying() {
        println!("  {}", assignment);
    }
    print!("{}", evaluation.grid());

    let strict = evaluate("A&B C", None);
    if let Err(e) = strict {
        println!("Rejected: {}", e);
    }

    Ok(())
}
