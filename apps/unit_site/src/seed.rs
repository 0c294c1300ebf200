// apps/unit_site/src/seed.rs

//! First-run content: the unit's songs and the site title lines.

use crate::models::NewSong;
use crate::storage::Storage;
use anyhow::Context;
use tracing::{info, instrument};

struct SeedSong {
  title: &'static str,
  lyrics: &'static str,
  video_url: Option<&'static str>,
  category: &'static str,
}

const SEED_SONGS: &[SeedSong] = &[
  SeedSong {
    title: "שיר למפקד אמיר",
    lyrics: "המפקד אמיר, יאללה המפקד אמיר, יאללה המפקד אמיר, יאללה המפקד אמיר",
    video_url: None,
    category: "מפקדים",
  },
  SeedSong {
    title: "שיר למחלקה 4",
    lyrics: "מחלקה 4 יאללה מחלקה 4 יאללה מחלקה 4 יאללה מחלקה 4 יותר חזק מחלקה 4 יאללה מחלקה 4 יאללה מחלקה 4 יאללה מחלקה 4",
    video_url: None,
    category: "מחלקות",
  },
  SeedSong {
    title: "שיר למ״מ",
    lyrics: "היה היה מ״מ , קראו לו העכבר, תפקיד אחרי תפקיד בבהלת תמיד היום כל זה נגמר x2. אווו הוא עולה לגדוד הוא עולה לגדוד הוא עולה לגדוד הוא עולה לגדוד.",
    video_url: None,
    category: "מפקדים",
  },
  SeedSong {
    title: "שיר למ״פ",
    lyrics: "טירונות הנפצות ואבנונים \nחצי פלוגה פה חדולים \nהמפ מנפיץ את המפקדים \n\nגם אם נראה שהשחר לא יפציע לעולם \nהנה בא מ״פ חדש\nגם אם זה נראה שהשחר לא יפציע לעולם \nיאללה כולם תעשו כאן רעש\n\nמ״פ נעול, חולה על בית \nיושב לו בול במדים של זית \nאין בלבולי מח הוא נשבע \nנעלמו החדולים מהפלוגה",
    video_url: None,
    category: "מפקדים",
  },
  SeedSong {
    title: "שיר סוגרי השבתות",
    lyrics: "יום רביעי, הסופ״ש כבר מורגש בידיים מדי א בשלוף בארון, הסמל אומר תכין כומתה תגלחצ נעליים אתה עולה משפט למ״פ אתה נכנס הנה יום הדין הגיע. פתאום אני טיפה לחוץ שולף תירוץ אחרי תירוץ על המפ זה לא משפיע \n\nבהלצ שישי בצהריים \nסופ שבוע זה רק אני בס והממ של שתיים \nכל הנבחרים פה בפלוגה \nהתחצפות כוננות והפקרה אחד גם על חצי מימיה \nהנה עוד שיחה מאמא\nיא איבני איך אתה תלמד \nלא מטווסים עם כל אחד \nהשארת אותנו פה לבד…\n\nיום ראשון \nאמא אומרת הגזמת \nתיזהר \nהשבת אצל סבא וסבתא \nאני אומר לה תירגעי\nהשבוע אני נקי\nלא יהיה פה שום אירוע \n\nכל השבוע אני ספץ פתאום המפקד שוב מתפוצץ \nבסהכ רציתי פיצה",
    video_url: Some("https://youtu.be/euG7A3CuIlI?si=T6jS4qDFrta6oAGZ"),
    category: "כללי",
  },
];

const SEED_CONTENT: &[(&str, &str)] = &[("site_title", "פלוגה 603"), ("site_subtitle", "אוגוסט 2025")];

/// Fills the song and content tables if, and only if, they are empty.
#[instrument(name = "seed::defaults", skip(storage))]
pub async fn seed_defaults(storage: &dyn Storage) -> anyhow::Result<()> {
  let songs = storage.list_songs().await.context("listing songs before seeding")?;
  if songs.is_empty() {
    for seed in SEED_SONGS {
      let song = NewSong {
        title: seed.title.to_string(),
        lyrics: seed.lyrics.to_string(),
        video_url: seed.video_url.map(str::to_string),
        category: seed.category.to_string(),
      };
      storage
        .create_song(&song)
        .await
        .with_context(|| format!("seeding song '{}'", seed.title))?;
    }
    info!(count = SEED_SONGS.len(), "Seeded default songs.");
  }

  let content = storage.list_content().await.context("listing content before seeding")?;
  if content.is_empty() {
    for (key, value) in SEED_CONTENT {
      storage
        .upsert_content(key, value)
        .await
        .with_context(|| format!("seeding content key '{}'", key))?;
    }
    info!(count = SEED_CONTENT.len(), "Seeded default site content.");
  }

  Ok(())
}
