use log::info;

/// Brightness the lights dim to while a movie plays
pub const MOVIE_BRIGHTNESS: u8 = 10;
/// Brightness the lights return to after the movie
pub const HOUSE_BRIGHTNESS: u8 = 80;
/// Amplifier volume used for movies
pub const MOVIE_VOLUME: u8 = 50;

#[derive(Debug, Default)]
pub struct Projector {
    on: bool,
    source: Option<String>,
}

impl Projector {
    pub fn on(&mut self) -> String {
        self.on = true;
        "Projector is on".to_string()
    }

    pub fn set_dvd_player(&mut self, player: &DvdPlayer) -> String {
        self.source = Some(player.name().to_string());
        format!("Projector is now connected to DVD {}", player.name())
    }

    pub fn off(&mut self) -> String {
        self.on = false;
        "Projector is off".to_string()
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

#[derive(Debug, Default)]
pub struct Amplifier {
    on: bool,
    volume: u8,
    surround: bool,
    source: Option<String>,
}

impl Amplifier {
    pub fn on(&mut self) -> String {
        self.on = true;
        "Amp is on".to_string()
    }

    pub fn set_volume(&mut self, volume: u8) -> String {
        self.volume = volume;
        format!("Volume is now at {}", volume)
    }

    pub fn set_dvd_player(&mut self, player: &DvdPlayer) -> String {
        self.source = Some(player.name().to_string());
        format!("Amp is now connected to DVD {}", player.name())
    }

    pub fn set_surround_sound(&mut self) -> String {
        self.surround = true;
        "Surround sound is now on".to_string()
    }

    pub fn off(&mut self) -> String {
        self.on = false;
        "Amp is off".to_string()
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    pub fn surround(&self) -> bool {
        self.surround
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

/// DVD player loaded with a single title
#[derive(Debug)]
pub struct DvdPlayer {
    name: String,
    on: bool,
    playing: bool,
}

impl DvdPlayer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            on: false,
            playing: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn on(&mut self) -> String {
        self.on = true;
        "Dvd is on".to_string()
    }

    pub fn play(&mut self) -> String {
        self.playing = true;
        format!("Playing {}", self.name)
    }

    pub fn off(&mut self) -> String {
        self.on = false;
        self.playing = false;
        "Dvd is off".to_string()
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }
}

#[derive(Debug, Default)]
pub struct Lights {
    brightness: u8,
}

impl Lights {
    pub fn dim(&mut self, brightness: u8) -> String {
        self.brightness = brightness;
        format!("Lights are dimmed to {}", brightness)
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }
}

/// One-call control over the home theater devices
pub struct TheaterFacade {
    dvd_player: DvdPlayer,
    lights: Lights,
    amp: Amplifier,
    projector: Projector,
}

impl TheaterFacade {
    pub fn new(dvd_player: DvdPlayer, lights: Lights, amp: Amplifier, projector: Projector) -> Self {
        Self {
            dvd_player,
            lights,
            amp,
            projector,
        }
    }

    /// Power everything up, wire the player in and start playback
    pub fn watch_movie(&mut self) -> Vec<String> {
        info!("Starting movie '{}'", self.dvd_player.name());
        vec![
            self.dvd_player.on(),
            self.lights.dim(MOVIE_BRIGHTNESS),
            self.projector.on(),
            self.projector.set_dvd_player(&self.dvd_player),
            self.amp.on(),
            self.amp.set_dvd_player(&self.dvd_player),
            self.amp.set_surround_sound(),
            self.amp.set_volume(MOVIE_VOLUME),
            self.dvd_player.play(),
        ]
    }

    /// Bring the lights up and power everything down
    pub fn end_movie(&mut self) -> Vec<String> {
        info!("Ending movie '{}'", self.dvd_player.name());
        vec![
            self.lights.dim(HOUSE_BRIGHTNESS),
            self.dvd_player.off(),
            self.projector.off(),
            self.amp.off(),
        ]
    }

    pub fn dvd_player(&self) -> &DvdPlayer {
        &self.dvd_player
    }

    pub fn lights(&self) -> &Lights {
        &self.lights
    }

    pub fn amp(&self) -> &Amplifier {
        &self.amp
    }

    pub fn projector(&self) -> &Projector {
        &self.projector
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theater() -> TheaterFacade {
        TheaterFacade::new(
            DvdPlayer::new("Aquaman"),
            Lights::default(),
            Amplifier::default(),
            Projector::default(),
        )
    }

    #[test]
    fn test_watch_movie_sequence() {
        let mut theater = theater();
        let lines = theater.watch_movie();

        assert_eq!(
            lines,
            vec![
                "Dvd is on",
                "Lights are dimmed to 10",
                "Projector is on",
                "Projector is now connected to DVD Aquaman",
                "Amp is on",
                "Amp is now connected to DVD Aquaman",
                "Surround sound is now on",
                "Volume is now at 50",
                "Playing Aquaman",
            ]
        );
        assert!(theater.dvd_player().is_playing());
        assert_eq!(theater.amp().volume(), MOVIE_VOLUME);
        assert!(theater.amp().surround());
        assert_eq!(theater.projector().source(), Some("Aquaman"));
        assert_eq!(theater.lights().brightness(), MOVIE_BRIGHTNESS);
    }

    #[test]
    fn test_end_movie_powers_down() {
        let mut theater = theater();
        theater.watch_movie();
        let lines = theater.end_movie();

        assert_eq!(
            lines,
            vec!["Lights are dimmed to 80", "Dvd is off", "Projector is off", "Amp is off"]
        );
        assert!(!theater.dvd_player().is_on());
        assert!(!theater.dvd_player().is_playing());
        assert!(!theater.projector().is_on());
        assert!(!theater.amp().is_on());
        assert_eq!(theater.lights().brightness(), HOUSE_BRIGHTNESS);
    }
}
