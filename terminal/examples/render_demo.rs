use common::{Direction, GameSession, STEP_INTERVAL};
use terminal::render::{
    grid::GridRenderer,
    standard_renderer::StandardRenderer,
    types::{CharDimensions, RenderConfig},
};

fn main() {
    // Deterministic session, stepped through a short scripted run
    let mut session = GameSession::new(7);
    for _ in 0..4 {
        session.update(STEP_INTERVAL);
    }
    session.steer(Direction::Up);
    for _ in 0..3 {
        session.update(STEP_INTERVAL);
    }

    println!("LENGTH: {}", session.score());

    println!("\n=== 1x1 Rendering (Classic) ===");
    render_with_dimensions(&session, CharDimensions::new(1, 1));

    println!("\n=== 2x1 Rendering (Wide) ===");
    render_with_dimensions(&session, CharDimensions::new(2, 1));
}

fn render_with_dimensions(session: &GameSession, char_dims: CharDimensions) {
    let renderer = StandardRenderer::new(char_dims);
    let grid_renderer = GridRenderer::new(renderer);
    let config = RenderConfig { chars_per_tile: char_dims };

    let char_grid = grid_renderer.render(session, &config);
    let width = char_grid.physical_width();
    let lines = char_grid.into_lines();

    println!(
        "Dimensions: {}x{} chars per tile",
        char_dims.horizontal, char_dims.vertical
    );

    // Draw top border
    print!("┌");
    for _ in 0..width {
        print!("─");
    }
    println!("┐");

    // Draw arena with side borders
    for line in lines {
        print!("│");
        for ch in line {
            print!("{}", ch);
        }
        println!("│");
    }

    // Draw bottom border
    print!("└");
    for _ in 0..width {
        print!("─");
    }
    println!("┘");
}
