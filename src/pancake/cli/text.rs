pub(super) const HELP: &str = "\
PanCake Help
============================================================================
help                     ->        display this message
tasks                    ->        display all your tasks
trash                    ->        display the content of the trash
secrets                  ->        display your secret tasks (password)
new <task>               ->        add a new task
remove <task>            ->        move a task to the trash
removeall                ->        move every unpinned task to the trash
complete <task>          ->        complete a task
full-complete            ->        complete every task
unfinish <task>          ->        unfinish a task
full-unfinish            ->        unfinish every task
recover <task>           ->        recover a removed task
recoverall               ->        recover everything in the trash
destroy <task>           ->        remove a task from the trash for good
empty                    ->        empty the trash for good
advancement              ->        see the tasks advancement
pin <task>               ->        pin a task
unpin <task>             ->        unpin a task
hide <task>              ->        hide a task in your secrets (password)
show <task>              ->        bring a secret task back (password)
secrets-setpw            ->        change the secrets password
history                  ->        show every command you typed
history-clear            ->        forget the command history
setlogs <0|1|2>          ->        silent, important only, or verbose logs
log <text>               ->        print a line of text
save                     ->        save your current tasks
load                     ->        load the save file
clear                    ->        clear the screen
updated                  ->        show what's new in this version
license                  ->        display the MIT License terms for PanCake
exit                     ->        exit PanCake";

pub(super) const LICENSE: &str = "\
Copyright (c) 2024 Wither__

Permission is hereby granted, free of charge, to any person obtaining
a copy of this software and associated documentation files (the
\"Software\"), to deal in the Software without restriction, including
without limitation the rights to use, copy, modify, merge, publish,
distribute, sublicense, and/or sell copies of the Software, and to
permit persons to whom the Software is furnished to do so, subject to
the following conditions:

The above copyright notice and this permission notice shall be included
in all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND,
EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT.
IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY
CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT,
TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE
SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.";

pub(super) const UPDATED: &str = "\
What's new?
- Secret tasks behind a password (hide, show, secrets, secrets-setpw)
- Command history (history, history-clear)
- Adjustable logs (setlogs, log)
- Bulk commands: removeall, full-complete, full-unfinish, recoverall, empty
- Recovered trash always comes back unfinished";
