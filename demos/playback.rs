use keyline::{EditorAction, ModelBuilder, PlaybackOpts, Player, TickOutcome, read_animation};

const ANIMATION: &str = "\
canvas 0 0 400 300
shape sun ellipse
shape box rectangle
motion sun 1 20 20 40 40 255 200 0   20 320 20 40 40 255 120 0
motion box 1 50 200 60 60 0 0 255    10 50 200 60 60 0 0 255
motion box 10 50 200 60 60 0 0 255   20 250 150 90 90 0 160 255
";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let model = read_animation(ANIMATION, ModelBuilder::new())?;
    let mut player = Player::new(
        model,
        PlaybackOpts {
            speed: 40,
            looping: false,
        },
    )?;
    player.play()?;

    loop {
        std::thread::sleep(player.interval());
        match player.handle_tick() {
            TickOutcome::Advanced(tick) => {
                for s in player.frame()? {
                    tracing::info!(tick = tick.0, id = %s.id, x = s.attrs.x, y = s.attrs.y, "frame");
                }
                if tick.0 == 10 {
                    let picked = player.handle_pointer_click(70, 220)?;
                    tracing::info!(%picked, "clicked");
                    player.apply(EditorAction::SpeedUp)?;
                }
            }
            TickOutcome::Finished => break,
            TickOutcome::Held | TickOutcome::Looped => {}
        }
    }

    println!("{}", keyline::export_text(player.model())?);
    Ok(())
}
