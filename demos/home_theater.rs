use patternkit::patterns::facade::{Amplifier, DvdPlayer, Lights, Projector, TheaterFacade};

fn main() {
    patternkit::logging::init();

    let mut theater = TheaterFacade::new(
        DvdPlayer::new("Aquaman"),
        Lights::default(),
        Amplifier::default(),
        Projector::default(),
    );

    for line in theater.watch_movie().into_iter().chain(theater.end_movie()) {
        println!("{}", line);
    }
}
