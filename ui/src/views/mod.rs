mod arena;
pub use arena::Arena;

mod classroom;
pub use classroom::Classroom;

mod events;
pub use events::Events;

mod homepage;
pub use homepage::Homepage;

mod leaderboard;
pub use leaderboard::Leaderboard;

mod learn;
pub use learn::Learn;

mod login;
pub use login::Login;

mod parents_dashboard;
pub use parents_dashboard::ParentsDashboard;

mod teacher_dashboard;
pub use teacher_dashboard::TeacherDashboard;

mod virtual_lab;
pub use virtual_lab::VirtualLab;
