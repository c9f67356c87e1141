mod clip_list;
mod live_image;
mod loading;
mod settings_form;
mod video_player;

pub use clip_list::ClipList;
pub use live_image::LiveImage;
pub use loading::Loading;
pub use settings_form::SettingsForm;
pub use video_player::VideoPlayer;
