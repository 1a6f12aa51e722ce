use gridgen::{carve, generate_solution};

fn main() {
    env_logger::init();

    let solution = generate_solution(9).expect("order 9 is supported");
    let (puzzle, givens) = carve(solution, 45).expect("45 is below the cell count");
    println!("{:?}", puzzle);
    println!("Number of givens: {}", givens.num_given());
}
