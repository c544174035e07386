use std::io::{self, Write};

use crate::engine::project::print_query;
use crate::store::Store;

/// A fixed, parameter-free analytic query. Reports go straight to the
/// projector; they never pass through the builder or binder.
#[derive(Debug, Clone, Copy)]
pub struct Report {
    pub description: &'static str,
    pub sql: &'static str,
}

pub const REPORTS: [Report; 6] = [
    Report {
        description: "Find the total number of anime purchased by customer 'plapwood3'.",
        sql: "SELECT COUNT(Anime_title) AS Total_purchased \
              FROM PURCHASES WHERE Customer = 'plapwood3';",
    },
    Report {
        description: "Find the most popular anime in the database (use the number of times \
                      the item has been purchased to calculate).",
        sql: "SELECT a.Title, COUNT(p.Anime_title) as Total_Purchased \
              FROM ANIME a LEFT JOIN PURCHASES p ON a.Title = p.Anime_title \
              GROUP BY a.Title ORDER BY Total_Purchased DESC LIMIT 1;",
    },
    Report {
        description: "Find the most popular studio in the database (i.e. the one who has had \
                      the most purchased anime).",
        sql: "SELECT Studio_name, COUNT(*) AS num_purchases \
              FROM PURCHASES p JOIN CREATOR c ON p.Anime_title = c.Anime_title \
              GROUP BY Studio_name ORDER BY num_purchases DESC LIMIT 1;",
    },
    Report {
        description: "Find the most watched anime in the database.",
        sql: "SELECT ANIME.Title, COUNT(*) AS WatchCount \
              FROM ANIME JOIN CUSTOMER_WATCHES ON ANIME.Title = CUSTOMER_WATCHES.Anime \
              GROUP BY ANIME.Title \
              HAVING COUNT(*) = ( \
                SELECT MAX(WatchCount) FROM ( \
                  SELECT COUNT(*) AS WatchCount \
                  FROM ANIME JOIN CUSTOMER_WATCHES ON ANIME.Title = CUSTOMER_WATCHES.Anime \
                  GROUP BY ANIME.Title));",
    },
    Report {
        description: "Find the customer who has purchased the most anime and the total number \
                      of anime they have purchased.",
        sql: "SELECT Customer, COUNT(Customer) AS Total \
              FROM PURCHASES GROUP BY CUSTOMER \
              ORDER BY COUNT(CUSTOMER) DESC LIMIT 1;",
    },
    Report {
        description: "Find all anime released before 2023.",
        sql: "SELECT Title, Genre, Release_year FROM ANIME \
              WHERE Release_year < 2023 ORDER BY Genre;",
    },
];

/// Prints every report: description first, then the projected result
pub fn print_all(store: &mut dyn Store, out: &mut dyn Write) -> io::Result<()> {
    for (idx, report) in REPORTS.iter().enumerate() {
        let n = idx + 1;
        writeln!(out)?;
        writeln!(out, "---- Report {n}. ----")?;
        writeln!(out, "{}", report.description)?;
        writeln!(out)?;

        let label = format!("running report {n}");
        print_query(store, report.sql, &label, out)?;

        writeln!(out, "---- End of Report {n}. ----")?;
        writeln!(out)?;
    }
    writeln!(out, "All {} reports have been printed.", REPORTS.len())?;
    writeln!(out)?;
    Ok(())
}
