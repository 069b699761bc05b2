pub mod crit_css;
