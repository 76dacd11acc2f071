pub mod timer_demo;
