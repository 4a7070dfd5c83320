use std::{fs, path::Path};

use anyhow::Context;

pub const MODULE_TS: &str = r#"import { Module } from '@nestjs/common';
import { DiscordService } from './discord.service';

@Module({
  providers: [DiscordService],
})
export class DiscordModule {}"#;

pub const SERVICE_TS: &str = r#"import { Injectable, OnModuleInit } from '@nestjs/common';
import { Client, GatewayIntentBits } from 'discord.js';

@Injectable()
export class DiscordService implements OnModuleInit {
  private readonly client: Client;

  constructor() {
    this.client = new Client({
      intents: [
        GatewayIntentBits.Guilds,
        GatewayIntentBits.GuildVoiceStates,
        GatewayIntentBits.GuildMessages,
        GatewayIntentBits.GuildMessageReactions,
        GatewayIntentBits.MessageContent,
      ],
    });
  }

  async onModuleInit() {
    console.log('Starting Discord bot...');
    await this.client.login(process.env.DISCORD_ENV);

    this.client.on('ready', () => {
      console.log('Discord bot is online!');
    });

    this.client.on('messageCreate', async (message) => {
      if (!message.content.startsWith('!') || message.author.bot) return;

      const args = message.content.slice(1).trim().split(/ +/);
      const command = args.shift()?.toLowerCase();

      if (command === 'test') {
        await message.reply('Test command executed!');
      }
    });
  }
}"#;

pub const ENV_FILE: &str = "DISCORD_ENV=your_discord_bot_token_here\n";

/// Writes the Discord module, service and `.env` under the project root,
/// creating intermediate directories; existing files are overwritten.
pub fn emit(project_dir: &Path) -> anyhow::Result<()> {
    let discord_dir = project_dir.join("src").join("discord");
    fs::create_dir_all(&discord_dir)
        .with_context(|| format!("failed to create `{}`", discord_dir.display()))?;

    fs::write(discord_dir.join("discord.module.ts"), MODULE_TS)?;
    fs::write(discord_dir.join("discord.service.ts"), SERVICE_TS)?;
    fs::write(project_dir.join(".env"), ENV_FILE)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_all_three_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        emit(dir.path()).unwrap();

        let discord_dir = dir.path().join("src").join("discord");
        assert_eq!(
            fs::read_to_string(discord_dir.join("discord.module.ts")).unwrap(),
            MODULE_TS
        );
        assert_eq!(
            fs::read_to_string(discord_dir.join("discord.service.ts")).unwrap(),
            SERVICE_TS
        );
        assert_eq!(
            fs::read_to_string(dir.path().join(".env")).unwrap(),
            ENV_FILE
        );
    }

    #[test]
    fn re_emitting_overwrites_in_place() {
        let dir = tempfile::tempdir().unwrap();
        emit(dir.path()).unwrap();

        let service = dir.path().join("src").join("discord").join("discord.service.ts");
        fs::write(&service, "edited by hand").unwrap();

        emit(dir.path()).unwrap();
        assert_eq!(fs::read_to_string(&service).unwrap(), SERVICE_TS);
    }

    #[test]
    fn service_wires_the_token_and_test_command() {
        assert!(SERVICE_TS.contains("process.env.DISCORD_ENV"));
        assert!(SERVICE_TS.contains("command === 'test'"));
    }
}
